use thiserror::Error;

/// Errors surfaced by the local demo ledger (wallet + connected banks).
///
/// Validation failures are returned synchronously so the UI can render
/// inline errors next to the form that caused them.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("no connected bank with id `{0}`")]
    NotFound(String),

    #[error("invalid amount {amount}: must be positive and at most {ceiling}")]
    InvalidAmount { amount: f64, ceiling: f64 },

    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: f64, available: f64 },

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Errors from the remote account adapter.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid account reference `{0}`")]
    InvalidReference(String),

    #[error("backend unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),

    #[error("backend rejected request ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("session storage error: {0}")]
    Session(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
