/// Connected-banks store operations
///
/// An ordered collection of fake bank records, overwritten whole on every
/// mutation (read-modify-write, acceptable at this scale).
use crate::error::{LedgerError, StorageError};
use crate::storage::models::{seed_accounts, BankAccount};
use crate::storage::{keys, KeyValue};

pub fn read<S: KeyValue>(storage: &S) -> Vec<BankAccount> {
    match storage.get(keys::CONNECTED_BANKS) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(accounts) => accounts,
            Err(e) => {
                log::warn!("Stored bank accounts are corrupt ({}), reseeding", e);
                seed(storage)
            }
        },
        Ok(None) => seed(storage),
        Err(e) => {
            log::warn!("Bank accounts store unavailable ({}), using seed values", e);
            seed_accounts()
        }
    }
}

pub fn write<S: KeyValue>(storage: &S, next: &[BankAccount]) -> Result<(), StorageError> {
    let raw = serde_json::to_string(next)?;
    storage.set(keys::CONNECTED_BANKS, &raw)
}

/// Adjust one account's balance by `delta`, clamping at zero.
///
/// An unknown id is an error. The browser build silently ignored it, which
/// made callers misreport success; see the not-found handling in
/// `transfer_ops` tests.
pub fn adjust_balance<S: KeyValue>(
    storage: &S,
    account_id: &str,
    delta: f64,
) -> Result<BankAccount, LedgerError> {
    let mut accounts = read(storage);
    let account = accounts
        .iter_mut()
        .find(|a| a.id == account_id)
        .ok_or_else(|| LedgerError::NotFound(account_id.to_string()))?;

    account.current_balance = (account.current_balance + delta).max(0.0);
    let updated = account.clone();
    write(storage, &accounts)?;
    Ok(updated)
}

fn seed<S: KeyValue>(storage: &S) -> Vec<BankAccount> {
    let accounts = seed_accounts();
    if let Err(e) = write(storage, &accounts) {
        log::warn!("Could not persist bank account seeds: {}", e);
    }
    accounts
}
