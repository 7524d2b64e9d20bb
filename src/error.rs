//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Every variant is a client error: the ledger performs no I/O, so there
/// is no transient or server-side failure to report.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum AppError {
    /// An account with the requested `cpf` is already registered.
    #[error("account already exists")]
    DuplicateAccount,

    /// The `cpf` header is missing or names no registered account.
    #[error("account not found")]
    AccountNotFound,

    /// The withdrawal amount exceeds the current balance.
    #[error("insufficient funds")]
    InsufficientFunds,

    /// Request body, query or parameters are invalid.
    ///
    /// The String contains details about what was invalid.
    #[error("{0}")]
    InvalidRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors answer `400 Bad Request` with this body:
/// ```json
/// {
///   "error": "account not found"
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "request rejected");

        let body = Json(json!({ "error": self.to_string() }));

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
