//! Statement entry models and API request types.
//!
//! This module defines:
//! - `Transaction`: One entry of an account statement
//! - `TransactionKind`: Whether the entry adds (credit) or removes (debit) funds
//! - Request types for deposit, withdraw and date-filtered statement queries

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a statement entry.
///
/// Serialized as `"credit"` or `"debit"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Deposit, increases the balance
    Credit,

    /// Withdrawal, decreases the balance
    Debit,
}

/// A single entry of an account statement.
///
/// Entries are created by deposits and withdrawals and never modified
/// afterwards.
///
/// # JSON Example
///
/// ```json
/// {
///   "description": "salary",
///   "amount": 100.0,
///   "created_at": "2026-10-19T10:00:00Z",
///   "type": "credit"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Free text supplied by the caller, `null` when absent
    pub description: Option<String>,

    /// Always positive, the direction lives in `kind`
    #[serde(with = "super::amount")]
    pub amount: Decimal,

    /// When the entry was recorded
    pub created_at: DateTime<Utc>,

    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    /// Build a credit entry stamped with the current time.
    pub fn credit(description: Option<String>, amount: Decimal) -> Self {
        Self::at(TransactionKind::Credit, description, amount, Utc::now())
    }

    /// Build a debit entry stamped with the current time.
    pub fn debit(description: Option<String>, amount: Decimal) -> Self {
        Self::at(TransactionKind::Debit, description, amount, Utc::now())
    }

    /// Build an entry with an explicit timestamp.
    pub fn at(
        kind: TransactionKind,
        description: Option<String>,
        amount: Decimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            description,
            amount,
            created_at,
            kind,
        }
    }

    /// Amount with the sign of its effect on the balance.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Credit => self.amount,
            TransactionKind::Debit => -self.amount,
        }
    }

    /// Whether the entry was recorded on the given UTC calendar day.
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.created_at.date_naive() == date
    }
}

/// Request to deposit funds into the account named by the `cpf` header.
///
/// `amount` must be a JSON number with at most two decimal places.
///
/// # JSON Example
///
/// ```json
/// {
///   "description": "salary",
///   "amount": 100
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Amount to add, must be positive
    #[serde(with = "super::amount")]
    pub amount: Decimal,
}

/// Request to withdraw funds from the account named by the `cpf` header.
///
/// # Validation
///
/// - Amount must be positive
/// - Account balance must cover the amount
#[derive(Debug, Deserialize)]
pub struct WithdrawRequest {
    /// Amount to remove, must be positive
    #[serde(with = "super::amount")]
    pub amount: Decimal,

    #[serde(default)]
    pub description: Option<String>,
}

/// Query string of `GET /statement/date`, e.g. `?date=2026-10-19`.
#[derive(Debug, Deserialize)]
pub struct StatementDateQuery {
    pub date: NaiveDate,
}
