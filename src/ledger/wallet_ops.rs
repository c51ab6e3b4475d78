/// Wallet store operations
///
/// The wallet is a singleton record seeded on first read. Reads never
/// fail: an unreadable store falls back to the seed value so pages always
/// have something to render.
use crate::error::StorageError;
use crate::storage::models::Wallet;
use crate::storage::{keys, KeyValue};

pub fn read<S: KeyValue>(storage: &S) -> Wallet {
    match storage.get(keys::WALLET) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(wallet) => wallet,
            Err(e) => {
                log::warn!("Stored wallet is corrupt ({}), reseeding", e);
                seed(storage)
            }
        },
        Ok(None) => seed(storage),
        Err(e) => {
            log::warn!("Wallet store unavailable ({}), using seed value", e);
            Wallet::seed()
        }
    }
}

pub fn write<S: KeyValue>(storage: &S, next: &Wallet) -> Result<(), StorageError> {
    let raw = serde_json::to_string(next)?;
    storage.set(keys::WALLET, &raw)
}

/// Adjust the wallet balance by `delta`, clamping at zero. This is the
/// only bounds-enforcement point for the wallet.
pub fn adjust_balance<S: KeyValue>(storage: &S, delta: f64) -> Result<Wallet, StorageError> {
    let mut wallet = read(storage);
    wallet.balance = (wallet.balance + delta).max(0.0);
    write(storage, &wallet)?;
    Ok(wallet)
}

fn seed<S: KeyValue>(storage: &S) -> Wallet {
    let wallet = Wallet::seed();
    if let Err(e) = write(storage, &wallet) {
        log::warn!("Could not persist wallet seed: {}", e);
    }
    wallet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn first_read_seeds_exactly_once() {
        let storage = MemoryStore::new();
        let wallet = read(&storage);
        assert_eq!(wallet, Wallet::seed());

        // mutate the stored record; a second read must not reseed
        adjust_balance(&storage, 42.0).unwrap();
        assert_eq!(read(&storage).balance, 42.0);
    }

    #[test]
    fn adjust_clamps_at_zero() {
        let storage = MemoryStore::new();
        adjust_balance(&storage, 100.0).unwrap();

        let wallet = adjust_balance(&storage, -250.0).unwrap();
        assert_eq!(wallet.balance, 0.0);

        let wallet = adjust_balance(&storage, 10.0).unwrap();
        assert_eq!(wallet.balance, 10.0);
    }

    #[test]
    fn corrupt_record_reseeds() {
        let storage = MemoryStore::new();
        storage.set(keys::WALLET, "not json").unwrap();

        assert_eq!(read(&storage), Wallet::seed());
        // the reseed was persisted
        let raw = storage.get(keys::WALLET).unwrap().unwrap();
        assert!(serde_json::from_str::<Wallet>(&raw).is_ok());
    }
}
