//! The ledger engine - owns the account set and enforces every rule.
//!
//! Each operation follows the same shape: validate everything up front,
//! then commit through [`Account::apply`], then persist the whole set.
//! Because validation fully precedes mutation, a rejected operation leaves
//! the account set untouched.

use crate::error::LedgerResult;
use crate::seed;
use crate::session::Session;
use rust_decimal::Decimal;
use teller_core::{card, Account, CoreError, Limits, Transaction};
use teller_store::Store;

/// The account ledger engine.
///
/// Generic over the injected [`Store`]; the engine itself never touches
/// the filesystem.
pub struct LedgerEngine<S: Store> {
    accounts: Vec<Account>,
    store: S,
    limits: Limits,
}

impl<S: Store> LedgerEngine<S> {
    /// Load the engine from `store` with default limits, seeding the two
    /// demo accounts when the store holds nothing yet.
    pub fn new(store: S) -> LedgerResult<Self> {
        Self::with_limits(store, Limits::default())
    }

    /// Same as [`LedgerEngine::new`] with explicit limits.
    pub fn with_limits(store: S, limits: Limits) -> LedgerResult<Self> {
        let mut accounts = store.load()?;
        if accounts.is_empty() {
            accounts = seed::demo_accounts();
            store.save(&accounts)?;
            tracing::info!(count = accounts.len(), "empty store, demo accounts seeded");
        }
        Ok(Self {
            accounts,
            store,
            limits,
        })
    }

    /// The limits this engine enforces
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Number of accounts in the ledger
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    // === Authentication ===

    /// Authenticate by exact (card number, PIN) match.
    ///
    /// Field checks run in a fixed order so each failure carries a distinct
    /// message; the final lookup failure is always the undifferentiated
    /// `NotFound` regardless of which credential was wrong.
    pub fn authenticate(&self, card_number: &str, pin: &str) -> LedgerResult<Session> {
        card::require("card number", card_number)?;
        card::require("PIN", pin)?;
        card::require_len("Card number", card_number, self.limits.card_number_len)?;
        card::require_len("PIN", pin, self.limits.pin_len)?;

        let account = self
            .accounts
            .iter()
            .find(|a| a.matches(card_number, pin))
            .ok_or(CoreError::NotFound)?;

        tracing::debug!(session = %account.holder_name, "authenticated");
        Ok(Session::new(&account.card_number, &account.holder_name))
    }

    // === Account opening ===

    /// Open a new account and return a session for it.
    ///
    /// The card number is supplied by the caller (see
    /// [`teller_core::card::generate_card_number`]); uniqueness is enforced
    /// only by the duplicate check here.
    pub fn open_account(
        &mut self,
        holder_name: &str,
        card_number: &str,
        pin: &str,
        initial_deposit: Decimal,
    ) -> LedgerResult<Session> {
        card::require("name", holder_name)?;
        card::require("card number", card_number)?;
        card::require("PIN", pin)?;
        card::require_digits("Card number", card_number, self.limits.card_number_len)?;
        card::require_digits("PIN", pin, self.limits.pin_len)?;

        if initial_deposit < self.limits.min_opening_deposit {
            return Err(CoreError::InvalidAmount(initial_deposit).into());
        }
        if self.accounts.iter().any(|a| a.card_number == card_number) {
            return Err(CoreError::DuplicateAccount.into());
        }

        let account = Account::open(holder_name, card_number, pin, initial_deposit);
        let session = Session::new(&account.card_number, &account.holder_name);
        self.accounts.push(account);
        self.persist()?;

        tracing::info!(session = %session, %initial_deposit, "account opened");
        Ok(session)
    }

    // === Balance mutation ===

    /// Deposit `amount`, returning the new balance.
    pub fn deposit(&mut self, session: &Session, amount: Decimal) -> LedgerResult<Decimal> {
        require_positive(amount)?;
        if amount > self.limits.deposit_ceiling {
            return Err(CoreError::LimitExceeded {
                amount,
                limit: self.limits.deposit_ceiling,
            }
            .into());
        }

        let balance = self.commit(session, Transaction::deposit(amount))?;
        tracing::info!(session = %session, %amount, %balance, "deposit committed");
        Ok(balance)
    }

    /// Withdraw `amount`, returning the new balance.
    ///
    /// Insufficient funds is checked before the ceiling, so an over-balance
    /// request reports the funds problem even when it also breaks the limit.
    pub fn withdraw(&mut self, session: &Session, amount: Decimal) -> LedgerResult<Decimal> {
        require_positive(amount)?;

        let available = self.account(session)?.balance;
        if amount > available {
            return Err(CoreError::InsufficientFunds {
                requested: amount,
                available,
            }
            .into());
        }
        if amount > self.limits.withdrawal_ceiling {
            return Err(CoreError::LimitExceeded {
                amount,
                limit: self.limits.withdrawal_ceiling,
            }
            .into());
        }

        let balance = self.commit(session, Transaction::withdrawal(amount))?;
        tracing::info!(session = %session, %amount, %balance, "withdrawal committed");
        Ok(balance)
    }

    /// Withdraw one of the fast-cash presets, returning the new balance.
    ///
    /// Only available funds bound fast cash; the withdrawal ceiling does
    /// not apply to presets.
    pub fn fast_cash(&mut self, session: &Session, preset: Decimal) -> LedgerResult<Decimal> {
        if !self.limits.is_fast_cash_preset(preset) {
            return Err(CoreError::InvalidAmount(preset).into());
        }

        let available = self.account(session)?.balance;
        if preset > available {
            return Err(CoreError::InsufficientFunds {
                requested: preset,
                available,
            }
            .into());
        }

        let balance = self.commit(session, Transaction::fast_cash(preset))?;
        tracing::info!(session = %session, %preset, %balance, "fast cash committed");
        Ok(balance)
    }

    // === PIN management ===

    /// Change the account's PIN.
    pub fn change_pin(
        &mut self,
        session: &Session,
        current_pin: &str,
        new_pin: &str,
        confirm_new_pin: &str,
    ) -> LedgerResult<()> {
        card::require("current PIN", current_pin)?;
        card::require("new PIN", new_pin)?;
        card::require("PIN confirmation", confirm_new_pin)?;

        if self.account(session)?.pin != current_pin {
            return Err(CoreError::PinMismatch.into());
        }
        card::require_digits("New PIN", new_pin, self.limits.pin_len)?;
        if new_pin != confirm_new_pin {
            return Err(CoreError::PinConfirmationMismatch.into());
        }
        if new_pin == current_pin {
            return Err(CoreError::PinReuse.into());
        }

        self.account_mut(session)?.pin = new_pin.to_string();
        self.persist()?;

        tracing::info!(session = %session, "PIN changed");
        Ok(())
    }

    // === Queries ===

    /// Current balance; pure read.
    pub fn balance_inquiry(&self, session: &Session) -> LedgerResult<Decimal> {
        Ok(self.account(session)?.balance)
    }

    /// Retained history, newest first; pure read.
    pub fn statement(&self, session: &Session) -> LedgerResult<&[Transaction]> {
        Ok(self.account(session)?.statement())
    }

    // === Internals ===

    /// Commit a validated transaction and persist the whole set.
    fn commit(&mut self, session: &Session, tx: Transaction) -> LedgerResult<Decimal> {
        let cap = self.limits.history_cap;
        let account = self.account_mut(session)?;
        account.apply(tx, cap);
        let balance = account.balance;
        self.persist()?;
        Ok(balance)
    }

    fn persist(&self) -> LedgerResult<()> {
        self.store.save(&self.accounts)?;
        Ok(())
    }

    fn account(&self, session: &Session) -> LedgerResult<&Account> {
        self.accounts
            .iter()
            .find(|a| a.card_number == session.card_number())
            .ok_or_else(|| CoreError::NotFound.into())
    }

    fn account_mut(&mut self, session: &Session) -> LedgerResult<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|a| a.card_number == session.card_number())
            .ok_or_else(|| CoreError::NotFound.into())
    }
}

fn require_positive(amount: Decimal) -> Result<(), CoreError> {
    if amount <= Decimal::ZERO {
        return Err(CoreError::InvalidAmount(amount));
    }
    Ok(())
}
