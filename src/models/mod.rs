//! Data models held in the account store and exchanged over HTTP.

/// JSON encoding of monetary amounts
pub mod amount;
/// Customer account model
pub mod account;
/// Statement entry model
pub mod transaction;
