//! Teller CLI - ATM ledger operations from the command line
//!
//! Usage:
//! ```bash
//! teller gen-card
//! teller open --name "Ann" --pin 0001 --deposit 500
//! teller balance --card 1234567812345678 --pin 1234
//! teller deposit --card 1234567812345678 --pin 1234 250.00
//! teller fast-cash --card 1234567812345678 --pin 1234 200
//! teller statement --card 1234567812345678 --pin 1234
//! teller change-pin --card 1234567812345678 --pin 1234 --new 5678 --confirm 5678
//! ```
//!
//! Presentation only: every rule lives in `teller-engine`.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;
use teller_core::card;
use teller_engine::{LedgerEngine, Session};
use teller_store::JsonFileStore;

mod commands;

/// Teller - an ATM account ledger
#[derive(Parser)]
#[command(name = "teller")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Account data file path
    #[arg(long, default_value = "data/accounts.json", global = true)]
    pub data: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a 16-digit card number for account opening
    GenCard,

    /// Open a new account
    Open {
        /// Cardholder name
        #[arg(long, short)]
        name: String,
        /// Card number (generated when omitted)
        #[arg(long)]
        card: Option<String>,
        /// 4-digit PIN
        #[arg(long)]
        pin: String,
        /// Opening deposit (minimum 100.00)
        #[arg(long)]
        deposit: Decimal,
    },

    /// Show the current balance
    Balance {
        #[command(flatten)]
        auth: Auth,
    },

    /// Deposit funds
    Deposit {
        #[command(flatten)]
        auth: Auth,
        /// Amount to deposit
        amount: Decimal,
    },

    /// Withdraw funds
    Withdraw {
        #[command(flatten)]
        auth: Auth,
        /// Amount to withdraw
        amount: Decimal,
    },

    /// Withdraw a fixed preset amount
    FastCash {
        #[command(flatten)]
        auth: Auth,
        /// Preset amount
        amount: FastCashArg,
    },

    /// Show the recent transaction history
    Statement {
        #[command(flatten)]
        auth: Auth,
    },

    /// Change the account PIN
    ChangePin {
        #[command(flatten)]
        auth: Auth,
        /// New 4-digit PIN
        #[arg(long)]
        new: String,
        /// Confirmation of the new PIN
        #[arg(long)]
        confirm: String,
    },
}

/// Card credentials, shared by every authenticated subcommand
#[derive(clap::Args)]
pub struct Auth {
    /// 16-digit card number
    #[arg(long)]
    pub card: String,
    /// 4-digit PIN
    #[arg(long)]
    pub pin: String,
}

/// The fast-cash preset menu
#[derive(Clone, Copy, ValueEnum)]
pub enum FastCashArg {
    #[value(name = "20")]
    Twenty,
    #[value(name = "50")]
    Fifty,
    #[value(name = "100")]
    OneHundred,
    #[value(name = "200")]
    TwoHundred,
    #[value(name = "500")]
    FiveHundred,
    #[value(name = "1000")]
    OneThousand,
}

impl FastCashArg {
    pub fn amount(&self) -> Decimal {
        let value = match self {
            FastCashArg::Twenty => 20,
            FastCashArg::Fifty => 50,
            FastCashArg::OneHundred => 100,
            FastCashArg::TwoHundred => 200,
            FastCashArg::FiveHundred => 500,
            FastCashArg::OneThousand => 1000,
        };
        Decimal::from(value)
    }
}

fn authenticate(engine: &LedgerEngine<JsonFileStore>, auth: &Auth) -> Result<Session> {
    Ok(engine.authenticate(&auth.card, &auth.pin)?)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Commands::GenCard = cli.command {
        println!("{}", card::generate_card_number());
        return Ok(());
    }

    let mut engine = LedgerEngine::new(JsonFileStore::new(&cli.data))?;

    match cli.command {
        Commands::GenCard => unreachable!("handled above"),

        Commands::Open {
            name,
            card,
            pin,
            deposit,
        } => {
            let card = card.unwrap_or_else(card::generate_card_number);
            commands::open(&mut engine, &name, &card, &pin, deposit)?;
        }

        Commands::Balance { auth } => {
            let session = authenticate(&engine, &auth)?;
            commands::balance(&engine, &session)?;
        }

        Commands::Deposit { auth, amount } => {
            let session = authenticate(&engine, &auth)?;
            commands::deposit(&mut engine, &session, amount)?;
        }

        Commands::Withdraw { auth, amount } => {
            let session = authenticate(&engine, &auth)?;
            commands::withdraw(&mut engine, &session, amount)?;
        }

        Commands::FastCash { auth, amount } => {
            let session = authenticate(&engine, &auth)?;
            commands::fast_cash(&mut engine, &session, amount.amount())?;
        }

        Commands::Statement { auth } => {
            let session = authenticate(&engine, &auth)?;
            commands::statement(&engine, &session)?;
        }

        Commands::ChangePin { auth, new, confirm } => {
            let session = authenticate(&engine, &auth)?;
            commands::change_pin(&mut engine, &session, &auth.pin, &new, &confirm)?;
        }
    }

    Ok(())
}
