//! Account management HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - POST /account - Register new account
//! - GET /account - Get the account named by the `cpf` header
//! - PUT /account - Rename the account
//! - DELETE /account - Remove the account

use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    error::AppError,
    middleware::account_guard::AccountContext,
    models::account::{Account, CreateAccountRequest, UpdateAccountRequest},
    services::account_service,
    store::SharedStore,
};

/// Register a new account.
///
/// # Endpoint
///
/// `POST /account`
///
/// # Request Body
///
/// ```json
/// {
///   "cpf": "111",
///   "name": "Alice"
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: Empty body
/// - **Error (400)**: `cpf` already registered, or malformed body
pub async fn create_account(
    State(store): State<SharedStore>,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(request) = payload?;

    account_service::register(&store, request.cpf, request.name).await?;

    Ok(StatusCode::CREATED)
}

/// Get the account addressed by the `cpf` header, statement included.
///
/// # Response
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "cpf": "111",
///   "name": "Alice",
///   "statement": [
///     {
///       "description": "salary",
///       "amount": 100.0,
///       "created_at": "2026-10-19T10:00:00Z",
///       "type": "credit"
///     }
///   ]
/// }
/// ```
pub async fn get_account(
    State(store): State<SharedStore>,
    Extension(ctx): Extension<AccountContext>,
) -> Result<Json<Account>, AppError> {
    let account = account_service::get_account(&store, &ctx.cpf).await?;

    Ok(Json(account))
}

/// Rename the account.
///
/// # Endpoint
///
/// `PUT /account` with body `{"name": "Alice Smith"}`
///
/// # Response
///
/// - **Success (201 Created)**: Empty body
pub async fn update_account(
    State(store): State<SharedStore>,
    Extension(ctx): Extension<AccountContext>,
    payload: Result<Json<UpdateAccountRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(request) = payload?;

    account_service::update_name(&store, &ctx.cpf, request.name).await?;

    Ok(StatusCode::CREATED)
}

/// Delete the account.
///
/// # Response
///
/// - **Success (200 OK)**: Array of the accounts that remain registered,
///   ordered by `cpf`
pub async fn delete_account(
    State(store): State<SharedStore>,
    Extension(ctx): Extension<AccountContext>,
) -> Result<Json<Vec<Account>>, AppError> {
    let remaining = account_service::delete_account(&store, &ctx.cpf).await?;

    Ok(Json(remaining))
}
