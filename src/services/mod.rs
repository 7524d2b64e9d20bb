//! Business logic services.
//!
//! Services contain the ledger rules separated from HTTP handlers.
//! They handle validation, lookups and statement bookkeeping on the store.

pub mod account_service;
pub mod transaction_service;
