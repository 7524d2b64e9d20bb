//! Account Ledger Service
//!
//! An in-memory bank account simulator served over HTTP. Customers register
//! an account under a `cpf`, deposit and withdraw funds, and read their
//! balance and statement.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: `cpf` keyed map behind an async `RwLock`, lost on restart
//! - **Identification**: `cpf` request header, no credential check
//! - **Format**: JSON requests/responses

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod store;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::store::SharedStore;

/// Build the HTTP router over the given store.
pub fn router(store: SharedStore) -> Router {
    // Routes addressing an existing account through the `cpf` header
    let guarded_routes = Router::new()
        .route(
            "/account",
            get(handlers::accounts::get_account)
                .put(handlers::accounts::update_account)
                .delete(handlers::accounts::delete_account),
        )
        .route("/statement", get(handlers::statements::get_statement))
        .route(
            "/statement/date",
            get(handlers::statements::get_statement_by_date),
        )
        .route("/deposit", post(handlers::transactions::create_deposit))
        .route("/withdraw", post(handlers::transactions::create_withdraw))
        .route("/balance", get(handlers::statements::get_balance))
        // Reject unknown accounts before any handler runs
        .route_layer(axum_middleware::from_fn_with_state(
            store.clone(),
            middleware::account_guard::account_guard,
        ));

    Router::new()
        // Public routes (no `cpf` header required)
        .route("/health", get(handlers::health::health_check))
        .route("/account", post(handlers::accounts::create_account))
        .merge(guarded_routes)
        .layer(TraceLayer::new_for_http())
        // Share the store with all handlers via State extraction
        .with_state(store)
}
