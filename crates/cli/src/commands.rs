//! Subcommand handlers - call the engine, print the outcome.

use anyhow::Result;
use rust_decimal::Decimal;
use teller_engine::{LedgerEngine, Session};
use teller_store::JsonFileStore;

type Engine = LedgerEngine<JsonFileStore>;

pub fn open(
    engine: &mut Engine,
    name: &str,
    card: &str,
    pin: &str,
    deposit: Decimal,
) -> Result<()> {
    let session = engine.open_account(name, card, pin, deposit)?;
    println!("Account created for {}", session.holder_name());
    println!("Card number: {}", grouped(session.card_number()));
    println!("Opening balance: ${:.2}", deposit);
    Ok(())
}

pub fn balance(engine: &Engine, session: &Session) -> Result<()> {
    let balance = engine.balance_inquiry(session)?;
    println!("{}", session);
    println!("Current balance: ${:.2}", balance);
    Ok(())
}

pub fn deposit(engine: &mut Engine, session: &Session, amount: Decimal) -> Result<()> {
    let balance = engine.deposit(session, amount)?;
    println!("Deposited ${:.2}", amount);
    println!("New balance: ${:.2}", balance);
    Ok(())
}

pub fn withdraw(engine: &mut Engine, session: &Session, amount: Decimal) -> Result<()> {
    let balance = engine.withdraw(session, amount)?;
    println!("Withdrew ${:.2}", amount);
    println!("New balance: ${:.2}", balance);
    Ok(())
}

pub fn fast_cash(engine: &mut Engine, session: &Session, amount: Decimal) -> Result<()> {
    let balance = engine.fast_cash(session, amount)?;
    println!("Withdrew ${:.2}", amount);
    println!("New balance: ${:.2}", balance);
    Ok(())
}

pub fn statement(engine: &Engine, session: &Session) -> Result<()> {
    let balance = engine.balance_inquiry(session)?;
    let transactions = engine.statement(session)?;

    println!("Mini statement for {}", session.holder_name());
    println!("Card: {}", grouped(session.card_number()));
    println!("Balance: ${:.2}", balance);
    println!();

    if transactions.is_empty() {
        println!("No transactions found");
        return Ok(());
    }
    for tx in transactions {
        let sign = if tx.is_credit() { "+" } else { "-" };
        let amount = format!("{}${:.2}", sign, tx.amount.abs());
        println!(
            "{:<22} {:<12} {}",
            tx.kind.as_str(),
            amount,
            tx.timestamp.format("%Y-%m-%d %H:%M:%S")
        );
    }
    Ok(())
}

pub fn change_pin(
    engine: &mut Engine,
    session: &Session,
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<()> {
    engine.change_pin(session, current, new, confirm)?;
    println!("PIN changed successfully");
    Ok(())
}

/// Format a card number in groups of four for display
fn grouped(card: &str) -> String {
    card.as_bytes()
        .chunks(4)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped_card() {
        assert_eq!(grouped("1234567812345678"), "1234 5678 1234 5678");
        assert_eq!(grouped("123"), "123");
    }
}
