//! Account data models and API request types.
//!
//! This module defines:
//! - `Account`: A customer account and its statement
//! - `CreateAccountRequest`: Request body for registering accounts
//! - `UpdateAccountRequest`: Request body for renaming accounts

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::transaction::Transaction;

/// A customer account held in the in-memory store.
///
/// # Balance
///
/// No balance is stored. It is always recomputed from `statement`, so the
/// statement is the single source of truth.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "cpf": "111",
///   "name": "Alice",
///   "statement": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier, assigned at registration
    pub id: Uuid,

    /// Customer identifier supplied by the caller
    ///
    /// Unique across the store and used as the lookup key for every
    /// guarded endpoint.
    pub cpf: String,

    /// Display name, the only field that can be changed after registration
    pub name: String,

    /// Append-only list of entries in chronological order
    pub statement: Vec<Transaction>,
}

impl Account {
    pub fn new(cpf: String, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            cpf,
            name,
            statement: Vec::new(),
        }
    }

    /// Current balance: credits minus debits, folded left to right.
    pub fn balance(&self) -> Decimal {
        self.statement
            .iter()
            .fold(Decimal::ZERO, |balance, entry| balance + entry.signed_amount())
    }

    /// Entries recorded on `date`, in insertion order.
    pub fn statement_on(&self, date: NaiveDate) -> Vec<Transaction> {
        self.statement
            .iter()
            .filter(|entry| entry.is_on(date))
            .cloned()
            .collect()
    }

    /// Append an entry to the statement.
    pub fn record(&mut self, entry: Transaction) {
        self.statement.push(entry);
    }
}

/// Request body for registering a new account.
///
/// # JSON Example
///
/// ```json
/// {
///   "cpf": "111",
///   "name": "Alice"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub cpf: String,
    pub name: String,
}

/// Body of `GET /balance`: the balance as a bare JSON number, e.g. `60.5`.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct BalanceResponse(#[serde(with = "super::amount")] pub Decimal);

/// Request body for `PUT /account`.
#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    /// New display name
    pub name: String,
}
