//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, query, account context)
//! 2. Delegates to a service
//! 3. Returns HTTP response (JSON, status code)

/// Account management endpoints
pub mod accounts;
/// Service health endpoint
pub mod health;
/// Statement and balance endpoints
pub mod statements;
/// Deposit and withdraw endpoints
pub mod transactions;
