//! HTTP middleware components.
//!
//! Middleware are functions that run before route handlers.
//! They can:
//! - Resolve the account a request addresses
//! - Short-circuit requests for unknown accounts

/// `cpf` header account guard
pub mod account_guard;
