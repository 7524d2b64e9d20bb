//! Health check endpoint for service monitoring.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{services::account_service, store::SharedStore};

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Number of registered accounts
    pub accounts: usize,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "accounts": 2,
///   "timestamp": "2026-10-19T19:00:00Z"
/// }
/// ```
pub async fn health_check(State(store): State<SharedStore>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        accounts: account_service::count(&store).await,
        timestamp: Utc::now(),
    })
}
