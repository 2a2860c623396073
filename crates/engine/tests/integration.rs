//! End-to-end exercises of the ledger engine against real stores.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use teller_core::TransactionKind;
use teller_engine::{seed, LedgerEngine};
use teller_store::{JsonFileStore, MemoryStore};

#[test]
fn balance_is_conserved_under_history_truncation() {
    let mut engine = LedgerEngine::new(MemoryStore::new()).unwrap();
    let session = engine
        .open_account("Ann", "1111222233334444", "0001", dec!(1000.00))
        .unwrap();

    // Drive well past the 10-entry retention window and track the
    // expected balance independently
    let mut expected = dec!(1000.00);
    for i in 1..=25u32 {
        let amount = Decimal::from(i);
        if i % 3 == 0 {
            engine.withdraw(&session, amount).unwrap();
            expected -= amount;
        } else {
            engine.deposit(&session, amount).unwrap();
            expected += amount;
        }
    }

    assert_eq!(engine.balance_inquiry(&session).unwrap(), expected);
    assert_eq!(engine.statement(&session).unwrap().len(), 10);
}

#[test]
fn withdrawals_never_go_negative() {
    let mut engine = LedgerEngine::new(MemoryStore::new()).unwrap();
    let session = engine
        .open_account("Ann", "1111222233334444", "0001", dec!(150.00))
        .unwrap();

    assert!(engine.withdraw(&session, dec!(150.01)).is_err());
    assert!(engine.fast_cash(&session, dec!(200)).is_err());
    assert_eq!(engine.balance_inquiry(&session).unwrap(), dec!(150.00));

    // Draining to exactly zero is allowed
    engine.withdraw(&session, dec!(150.00)).unwrap();
    assert_eq!(engine.balance_inquiry(&session).unwrap(), dec!(0));
    assert!(engine.fast_cash(&session, dec!(20)).is_err());
}

#[test]
fn statement_returns_ten_newest_entries_first() {
    let mut engine = LedgerEngine::new(MemoryStore::new()).unwrap();
    let session = engine.authenticate(seed::DEMO_CARD_JANE, "9876").unwrap();

    for i in 1..=14u32 {
        engine.deposit(&session, Decimal::from(i)).unwrap();
    }

    let statement = engine.statement(&session).unwrap();
    assert_eq!(statement.len(), 10);
    let amounts: Vec<Decimal> = statement.iter().map(|tx| tx.amount).collect();
    let expected: Vec<Decimal> = (5..=14u32).rev().map(Decimal::from).collect();
    assert_eq!(amounts, expected);
}

#[test]
fn every_mutation_is_persisted_and_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("accounts.json");

    {
        let mut engine = LedgerEngine::new(JsonFileStore::new(&path)).unwrap();
        let session = engine.authenticate(seed::DEMO_CARD_JOHN, "1234").unwrap();
        engine.deposit(&session, dec!(300.00)).unwrap();
        engine.fast_cash(&session, dec!(50)).unwrap();
        engine.change_pin(&session, "1234", "4321", "4321").unwrap();
    }

    // A fresh engine over the same file sees the committed state
    let engine = LedgerEngine::new(JsonFileStore::new(&path)).unwrap();
    let session = engine.authenticate(seed::DEMO_CARD_JOHN, "4321").unwrap();
    assert_eq!(engine.balance_inquiry(&session).unwrap(), dec!(5250.00));

    let statement = engine.statement(&session).unwrap();
    assert_eq!(statement[0].kind, TransactionKind::FastCashWithdrawal);
    assert_eq!(statement[0].amount, dec!(-50));
    assert_eq!(statement[1].kind, TransactionKind::Deposit);
    assert_eq!(statement[1].amount, dec!(300.00));
}

#[test]
fn rejected_operations_change_nothing_in_the_store() {
    let mut engine = LedgerEngine::new(MemoryStore::new()).unwrap();
    let session = engine.authenticate(seed::DEMO_CARD_JOHN, "1234").unwrap();

    let before = engine.statement(&session).unwrap().to_vec();
    let balance_before = engine.balance_inquiry(&session).unwrap();

    assert!(engine.deposit(&session, dec!(10000.01)).is_err());
    assert!(engine.withdraw(&session, dec!(2500.00)).is_err());
    assert!(engine.fast_cash(&session, dec!(33)).is_err());
    assert!(engine.change_pin(&session, "9999", "5678", "5678").is_err());

    assert_eq!(engine.balance_inquiry(&session).unwrap(), balance_before);
    assert_eq!(engine.statement(&session).unwrap(), before.as_slice());
    assert!(engine.authenticate(seed::DEMO_CARD_JOHN, "1234").is_ok());
}

#[test]
fn opening_deposit_minimum_scenario() {
    let mut engine = LedgerEngine::new(MemoryStore::new()).unwrap();

    assert!(engine
        .open_account("Ann", "1111222233334444", "0001", dec!(50.00))
        .is_err());

    let session = engine
        .open_account("Ann", "1111222233334444", "0001", dec!(500.00))
        .unwrap();
    let statement = engine.statement(&session).unwrap();
    assert_eq!(statement.len(), 1);
    assert_eq!(statement[0].kind, TransactionKind::InitialDeposit);
    assert_eq!(statement[0].amount, dec!(500.00));
}
