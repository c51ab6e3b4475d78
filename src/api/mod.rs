/// Remote account adapter
///
/// Talks to the Spring-style account backend and adapts its minimal
/// records into the richer view-model the pages consume.
///
/// - `client.rs` - reqwest plumbing, bearer token, JSON helpers
/// - `types.rs` - raw wire records as the backend sends them
/// - `model.rs` - view models and the field-mapping layer
/// - `accounts.rs` - account/transaction reads and money operations
/// - `auth.rs` - login/register/logout and session caching
pub mod accounts;
pub mod auth;
pub mod client;
pub mod model;
pub mod types;

pub use client::ApiClient;
pub use model::{
    AccountDetail, AccountView, AccountsSummary, Direction, TransactionKind, TransactionView,
};
