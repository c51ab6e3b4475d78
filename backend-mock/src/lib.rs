/// Mock bank backend
///
/// This crate provides both a standalone binary and library components
/// for mocking the MankatBank account service, so the client data layer
/// can be developed and tested without the real backend running.
pub mod handlers;
pub mod server;
pub mod state;
pub mod types;

// Re-export commonly used types
pub use server::{create_router, run_server, spawn_server};
pub use state::BankState;
pub use types::*;
