//! In-memory account store shared across HTTP requests.
//!
//! This module provides:
//! - `AccountStore`: the `cpf` keyed collection of accounts
//! - `SharedStore`: the lock-protected handle handed to every handler

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::account::Account;

/// Handle to the store used as router state.
///
/// Cloning is cheap: every clone points at the same collection. Mutations
/// take the write lock for the whole check-then-update sequence, which keeps
/// `cpf` uniqueness and balances consistent under concurrent requests.
pub type SharedStore = Arc<RwLock<AccountStore>>;

/// Create an empty shared store.
pub fn create_store() -> SharedStore {
    Arc::new(RwLock::new(AccountStore::default()))
}

/// Collection of live accounts keyed by `cpf`.
///
/// The store is the sole owner of every account. Iteration order is by
/// `cpf`.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: BTreeMap<String, Account>,
}

impl AccountStore {
    pub fn contains(&self, cpf: &str) -> bool {
        self.accounts.contains_key(cpf)
    }

    pub fn get(&self, cpf: &str) -> Option<&Account> {
        self.accounts.get(cpf)
    }

    pub fn get_mut(&mut self, cpf: &str) -> Option<&mut Account> {
        self.accounts.get_mut(cpf)
    }

    /// Insert an account under its own `cpf`.
    ///
    /// Returns `false` and leaves the store untouched if the `cpf` is taken.
    pub fn insert(&mut self, account: Account) -> bool {
        if self.contains(&account.cpf) {
            return false;
        }
        self.accounts.insert(account.cpf.clone(), account);
        true
    }

    pub fn remove(&mut self, cpf: &str) -> Option<Account> {
        self.accounts.remove(cpf)
    }

    /// All accounts, ordered by `cpf`.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rejects_taken_cpf() {
        let mut store = AccountStore::default();
        let first = Account::new("222".into(), "Bob".into());
        let first_id = first.id;

        assert!(store.insert(first));
        assert!(!store.insert(Account::new("222".into(), "Bobby".into())));

        assert_eq!(store.len(), 1);
        let kept = store.get("222").unwrap();
        assert_eq!(kept.id, first_id);
        assert_eq!(kept.name, "Bob");
    }

    #[test]
    fn test_remove_only_touches_addressed_account() {
        let mut store = AccountStore::default();
        store.insert(Account::new("111".into(), "Alice".into()));
        store.insert(Account::new("222".into(), "Bob".into()));
        store.insert(Account::new("333".into(), "Carol".into()));

        let removed = store.remove("222").unwrap();

        assert_eq!(removed.name, "Bob");
        let left: Vec<&str> = store.accounts().map(|a| a.cpf.as_str()).collect();
        assert_eq!(left, vec!["111", "333"]);
    }

    #[test]
    fn test_remove_unknown_is_none() {
        let mut store = AccountStore::default();

        assert!(store.remove("999").is_none());
        assert!(store.is_empty());
    }
}
