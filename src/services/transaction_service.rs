//! Transaction service - Core business logic for deposits, withdrawals and
//! statement queries.
//!
//! This service handles:
//! - Amount validation
//! - Balance checks before withdrawals
//! - Appending entries to account statements
//! - Balance and statement reads
//!
//! # Consistency
//!
//! Each mutation holds the store's write lock from the balance check to the
//! append, so no other request can observe or change the statement in
//! between. A rejected operation never records a partial entry.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    error::AppError,
    models::{amount::MAX_AMOUNT, transaction::Transaction},
    store::SharedStore,
};

fn ensure_positive(amount: Decimal) -> Result<(), AppError> {
    if amount <= Decimal::ZERO {
        return Err(AppError::InvalidRequest(
            "amount must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Deposit funds (append a credit entry).
///
/// # Errors
///
/// - `InvalidRequest`: amount is zero or negative, or the resulting balance
///   exceeds the representable range
/// - `AccountNotFound`: no account with this `cpf`
pub async fn deposit(
    store: &SharedStore,
    cpf: &str,
    description: Option<String>,
    amount: Decimal,
) -> Result<Transaction, AppError> {
    ensure_positive(amount)?;

    let mut accounts = store.write().await;
    let account = accounts.get_mut(cpf).ok_or(AppError::AccountNotFound)?;

    // Balances stay below MAX_AMOUNT so they render exactly as JSON numbers
    let in_range = account
        .balance()
        .checked_add(amount)
        .is_some_and(|balance| balance < MAX_AMOUNT);
    if !in_range {
        return Err(AppError::InvalidRequest(
            "amount exceeds the supported range".to_string(),
        ));
    }

    let entry = Transaction::credit(description, amount);
    account.record(entry.clone());

    tracing::info!(cpf, %amount, "deposit recorded");
    Ok(entry)
}

/// Withdraw funds (append a debit entry).
///
/// # Errors
///
/// - `InvalidRequest`: amount is zero or negative
/// - `AccountNotFound`: no account with this `cpf`
/// - `InsufficientFunds`: balance is lower than the amount
pub async fn withdraw(
    store: &SharedStore,
    cpf: &str,
    description: Option<String>,
    amount: Decimal,
) -> Result<Transaction, AppError> {
    ensure_positive(amount)?;

    let mut accounts = store.write().await;
    let account = accounts.get_mut(cpf).ok_or(AppError::AccountNotFound)?;

    let balance = account.balance();
    if balance < amount {
        tracing::warn!(cpf, %balance, %amount, "withdrawal rejected: insufficient funds");
        return Err(AppError::InsufficientFunds);
    }

    let entry = Transaction::debit(description, amount);
    account.record(entry.clone());

    tracing::info!(cpf, %amount, "withdrawal recorded");
    Ok(entry)
}

/// Full statement of an account, in insertion order.
pub async fn statement(store: &SharedStore, cpf: &str) -> Result<Vec<Transaction>, AppError> {
    store
        .read()
        .await
        .get(cpf)
        .map(|account| account.statement.clone())
        .ok_or(AppError::AccountNotFound)
}

/// Statement entries recorded on the given UTC calendar day.
pub async fn statement_on(
    store: &SharedStore,
    cpf: &str,
    date: NaiveDate,
) -> Result<Vec<Transaction>, AppError> {
    store
        .read()
        .await
        .get(cpf)
        .map(|account| account.statement_on(date))
        .ok_or(AppError::AccountNotFound)
}

/// Current balance of an account.
pub async fn balance(store: &SharedStore, cpf: &str) -> Result<Decimal, AppError> {
    store
        .read()
        .await
        .get(cpf)
        .map(|account| account.balance())
        .ok_or(AppError::AccountNotFound)
}
