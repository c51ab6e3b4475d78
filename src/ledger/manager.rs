use crate::error::{LedgerError, StorageError};
use crate::ledger::{bank_ops, transfer_ops, wallet_ops, TransferOutcome};
use crate::storage::models::{BankAccount, Wallet};
use crate::storage::KeyValue;

/// Orchestrator for the demo ledger.
///
/// Owns the injected storage and exposes the wallet, bank-accounts and
/// transfer operations behind one handle, which is what pages hold on to.
pub struct DemoLedger<S: KeyValue> {
    storage: S,
}

impl<S: KeyValue> DemoLedger<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn wallet(&self) -> Wallet {
        wallet_ops::read(&self.storage)
    }

    pub fn set_wallet(&self, next: &Wallet) -> Result<(), StorageError> {
        wallet_ops::write(&self.storage, next)
    }

    pub fn adjust_wallet_balance(&self, delta: f64) -> Result<Wallet, StorageError> {
        wallet_ops::adjust_balance(&self.storage, delta)
    }

    pub fn bank_accounts(&self) -> Vec<BankAccount> {
        bank_ops::read(&self.storage)
    }

    pub fn set_bank_accounts(&self, next: &[BankAccount]) -> Result<(), StorageError> {
        bank_ops::write(&self.storage, next)
    }

    pub fn adjust_bank_balance(
        &self,
        account_id: &str,
        delta: f64,
    ) -> Result<BankAccount, LedgerError> {
        bank_ops::adjust_balance(&self.storage, account_id, delta)
    }

    pub fn transfer_to_wallet(
        &self,
        bank_id: &str,
        amount: f64,
    ) -> Result<TransferOutcome, LedgerError> {
        transfer_ops::bank_to_wallet(&self.storage, bank_id, amount)
    }

    pub fn transfer_to_bank(
        &self,
        bank_id: &str,
        amount: f64,
    ) -> Result<TransferOutcome, LedgerError> {
        transfer_ops::wallet_to_bank(&self.storage, bank_id, amount)
    }
}
