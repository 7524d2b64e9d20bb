//! Statement and balance HTTP handlers.
//!
//! - GET /statement - Full statement
//! - GET /statement/date?date=YYYY-MM-DD - Entries of one day
//! - GET /balance - Current balance

use axum::{
    Extension, Json,
    extract::{Query, State, rejection::QueryRejection},
};
use crate::{
    error::AppError,
    middleware::account_guard::AccountContext,
    models::{
        account::BalanceResponse,
        transaction::{StatementDateQuery, Transaction},
    },
    services::transaction_service,
    store::SharedStore,
};

/// Full statement in insertion order.
pub async fn get_statement(
    State(store): State<SharedStore>,
    Extension(ctx): Extension<AccountContext>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let entries = transaction_service::statement(&store, &ctx.cpf).await?;

    Ok(Json(entries))
}

/// Statement entries recorded on one calendar day (UTC).
///
/// # Query Parameters
///
/// - `date` - Day in `YYYY-MM-DD` format, required
///
/// Returns an empty array for a day without activity.
pub async fn get_statement_by_date(
    State(store): State<SharedStore>,
    Extension(ctx): Extension<AccountContext>,
    query: Result<Query<StatementDateQuery>, QueryRejection>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let Query(query) = query?;

    let entries = transaction_service::statement_on(&store, &ctx.cpf, query.date).await?;

    Ok(Json(entries))
}

/// Current balance as a bare JSON number, e.g. `60.5`.
pub async fn get_balance(
    State(store): State<SharedStore>,
    Extension(ctx): Extension<AccountContext>,
) -> Result<Json<BalanceResponse>, AppError> {
    let balance = transaction_service::balance(&store, &ctx.cpf).await?;

    Ok(Json(BalanceResponse(balance)))
}
