/// Client-local persistence
///
/// The browser original kept everything in `localStorage`; here the same
/// contract is an injected key-value dependency so the ledger and session
/// cache can run against an in-memory store in tests and a file-backed
/// store in the demo binary.
pub mod file_system;
pub mod keys;
pub mod memory;
pub mod models;

pub use file_system::FileStore;
pub use memory::MemoryStore;

use crate::error::StorageError;

/// String-keyed storage of JSON documents.
pub trait KeyValue {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
