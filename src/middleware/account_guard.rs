//! Account guard middleware.
//!
//! This middleware runs before every endpoint that addresses an existing
//! account:
//! 1. Extract the customer identifier from the `cpf` header
//! 2. Verify an account is registered under it
//! 3. Inject the account context into the request
//! 4. Reject unknown or missing identifiers with `account not found`
//!
//! The header is a plain lookup key. No credential or session is verified.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use crate::{error::AppError, services::account_service, store::SharedStore};

/// Header carrying the customer identifier.
pub const CPF_HEADER: &str = "cpf";

/// Account context attached to guarded requests.
///
/// Handlers extract it with `Extension<AccountContext>` to know which
/// account the request addresses.
#[derive(Debug, Clone)]
pub struct AccountContext {
    /// Lookup key of the addressed account
    pub cpf: String,
}

/// Account guard middleware function.
///
/// # Headers
///
/// ```text
/// cpf: 111
/// ```
///
/// # Returns
///
/// - `Ok(Response)` from the next handler if the account exists
/// - `Err(AppError::AccountNotFound)` if the header is absent, not valid
///   UTF-8, or names no account
pub async fn account_guard(
    State(store): State<SharedStore>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let cpf = request
        .headers()
        .get(CPF_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::AccountNotFound)?
        .to_owned();

    account_service::lookup(&store, &cpf).await?;

    request.extensions_mut().insert(AccountContext { cpf });

    Ok(next.run(request).await)
}
