/// Demo ledger
///
/// Balance-holding records kept in client-local storage, mutated by
/// deposit/withdraw/transfer with basic validation. This is CRUD-level
/// bookkeeping over a non-durable cache, not an accounting engine.
///
/// - `wallet_ops.rs` - the singleton wallet record
/// - `bank_ops.rs` - the ordered collection of connected demo banks
/// - `transfer_ops.rs` - moving funds between a bank and the wallet
/// - `manager.rs` - orchestrator owning the injected storage
pub mod bank_ops;
pub mod manager;
pub mod transfer_ops;
pub mod wallet_ops;

pub use manager::DemoLedger;
pub use transfer_ops::{TransferOutcome, TRANSFER_CEILING};
