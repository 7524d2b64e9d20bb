//! Account service - registration, lookup and account maintenance.
//!
//! All functions operate on the shared store. Mutations hold the write lock
//! for their full duration so the `cpf` uniqueness check and the insert or
//! removal that follows it cannot interleave with another request.

use crate::{error::AppError, models::account::Account, store::SharedStore};

/// Register a new account.
///
/// # Returns
///
/// The created account, with a fresh `id` and an empty statement.
///
/// # Errors
///
/// - `InvalidRequest`: `cpf` is empty
/// - `DuplicateAccount`: an account with this `cpf` already exists
pub async fn register(
    store: &SharedStore,
    cpf: String,
    name: String,
) -> Result<Account, AppError> {
    if cpf.trim().is_empty() {
        return Err(AppError::InvalidRequest("cpf must not be empty".to_string()));
    }

    let account = Account::new(cpf, name);

    let mut accounts = store.write().await;
    if !accounts.insert(account.clone()) {
        tracing::warn!(cpf = %account.cpf, "duplicate account registration rejected");
        return Err(AppError::DuplicateAccount);
    }

    tracing::info!(cpf = %account.cpf, id = %account.id, "account registered");
    Ok(account)
}

/// Check that an account is registered under `cpf`.
///
/// This is the precondition checked before every guarded operation.
pub async fn lookup(store: &SharedStore, cpf: &str) -> Result<(), AppError> {
    if !store.read().await.contains(cpf) {
        return Err(AppError::AccountNotFound);
    }
    Ok(())
}

/// Full account record, statement included.
pub async fn get_account(store: &SharedStore, cpf: &str) -> Result<Account, AppError> {
    store
        .read()
        .await
        .get(cpf)
        .cloned()
        .ok_or(AppError::AccountNotFound)
}

/// Overwrite the display name of an account. The new name is not validated.
pub async fn update_name(store: &SharedStore, cpf: &str, name: String) -> Result<(), AppError> {
    let mut accounts = store.write().await;
    let account = accounts.get_mut(cpf).ok_or(AppError::AccountNotFound)?;
    account.name = name;

    tracing::info!(cpf, "account renamed");
    Ok(())
}

/// Remove an account by `cpf`.
///
/// # Returns
///
/// The accounts still registered after the removal, ordered by `cpf`.
pub async fn delete_account(store: &SharedStore, cpf: &str) -> Result<Vec<Account>, AppError> {
    let mut accounts = store.write().await;
    let removed = accounts.remove(cpf).ok_or(AppError::AccountNotFound)?;

    tracing::info!(cpf, id = %removed.id, "account deleted");
    Ok(accounts.accounts().cloned().collect())
}

/// Number of registered accounts.
pub async fn count(store: &SharedStore) -> usize {
    store.read().await.len()
}
