//! Transaction HTTP handlers.
//!
//! This module implements the endpoints that move funds:
//! - POST /deposit - Add money to the account
//! - POST /withdraw - Remove money from the account

use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    error::AppError,
    middleware::account_guard::AccountContext,
    models::transaction::{DepositRequest, WithdrawRequest},
    services::transaction_service,
    store::SharedStore,
};

/// Deposit into the account (append a credit entry).
///
/// # Request Body
///
/// ```json
/// {
///   "description": "salary",
///   "amount": 100
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: Empty body
/// - **Error (400)**: Amount not positive, or malformed body
pub async fn create_deposit(
    State(store): State<SharedStore>,
    Extension(ctx): Extension<AccountContext>,
    payload: Result<Json<DepositRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(request) = payload?;

    transaction_service::deposit(&store, &ctx.cpf, request.description, request.amount).await?;

    Ok(StatusCode::CREATED)
}

/// Withdraw from the account (append a debit entry).
///
/// # Validation
///
/// - Amount must be positive
/// - Balance must cover the amount, otherwise `insufficient funds`
pub async fn create_withdraw(
    State(store): State<SharedStore>,
    Extension(ctx): Extension<AccountContext>,
    payload: Result<Json<WithdrawRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(request) = payload?;

    transaction_service::withdraw(&store, &ctx.cpf, request.description, request.amount).await?;

    Ok(StatusCode::CREATED)
}
