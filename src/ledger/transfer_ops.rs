/// Transfers between a connected bank and the wallet
///
/// Validate-then-mutate over the two stores. The two writes are not
/// atomic: the stores are independent keys in a non-durable client cache,
/// so an interruption between them can leave the balances inconsistent.
use crate::error::LedgerError;
use crate::ledger::{bank_ops, wallet_ops};
use crate::storage::models::{BankAccount, Wallet};
use crate::storage::KeyValue;

/// Maximum amount permitted per single transfer in the demo.
pub const TRANSFER_CEILING: f64 = 1000.0;

/// Both records as written after a successful transfer.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferOutcome {
    pub bank: BankAccount,
    pub wallet: Wallet,
}

/// Move `amount` from a connected bank into the wallet.
pub fn bank_to_wallet<S: KeyValue>(
    storage: &S,
    bank_id: &str,
    amount: f64,
) -> Result<TransferOutcome, LedgerError> {
    let accounts = bank_ops::read(storage);
    let bank = accounts
        .iter()
        .find(|a| a.id == bank_id)
        .ok_or_else(|| LedgerError::NotFound(bank_id.to_string()))?;

    validate_amount(amount)?;
    if amount > bank.current_balance {
        return Err(LedgerError::InsufficientFunds {
            requested: amount,
            available: bank.current_balance,
        });
    }

    let bank = bank_ops::adjust_balance(storage, bank_id, -amount)?;
    let wallet = wallet_ops::adjust_balance(storage, amount)?;
    log::debug!("Moved {} from {} to wallet", amount, bank_id);
    Ok(TransferOutcome { bank, wallet })
}

/// Move `amount` from the wallet into a connected bank.
pub fn wallet_to_bank<S: KeyValue>(
    storage: &S,
    bank_id: &str,
    amount: f64,
) -> Result<TransferOutcome, LedgerError> {
    let accounts = bank_ops::read(storage);
    if !accounts.iter().any(|a| a.id == bank_id) {
        return Err(LedgerError::NotFound(bank_id.to_string()));
    }

    validate_amount(amount)?;
    let wallet = wallet_ops::read(storage);
    if amount > wallet.balance {
        return Err(LedgerError::InsufficientFunds {
            requested: amount,
            available: wallet.balance,
        });
    }

    let wallet = wallet_ops::adjust_balance(storage, -amount)?;
    let bank = bank_ops::adjust_balance(storage, bank_id, amount)?;
    log::debug!("Moved {} from wallet to {}", amount, bank_id);
    Ok(TransferOutcome { bank, wallet })
}

fn validate_amount(amount: f64) -> Result<(), LedgerError> {
    if !amount.is_finite() || amount <= 0.0 || amount > TRANSFER_CEILING {
        return Err(LedgerError::InvalidAmount {
            amount,
            ceiling: TRANSFER_CEILING,
        });
    }
    Ok(())
}
