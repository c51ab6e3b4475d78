/// MankatBank demo client data layer
///
/// Everything the demo banking UI needs between its pages and the world:
///
/// - `ledger` - wallet and connected-bank balances in client-local
///   storage, with deposit/withdraw/transfer between them
/// - `api` - the remote account adapter over the Spring-style backend
/// - `storage` - the injected key-value persistence the above run on
/// - `session` - cached bearer token and user profile
/// - `load_guard` - discards results of superseded page loads
pub mod api;
pub mod config;
pub mod error;
pub mod ledger;
pub mod load_guard;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, LedgerError, StorageError};
pub use ledger::{DemoLedger, TransferOutcome, TRANSFER_CEILING};
pub use load_guard::LoadGuard;
pub use session::SessionCache;
pub use storage::{FileStore, KeyValue, MemoryStore};
