/// Raw wire records, matching the backend's JSON field names.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account as returned by `GET /accounts` and `GET /accounts/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub id: i64,
    pub owner_name: String,
    pub balance: f64,
}

/// Transaction as returned by `GET /accounts/{id}/transactions`.
///
/// Every field is optional: the endpoint is young and older rows may miss
/// data, so the mapper fills in placeholders instead of failing the page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub amount: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for `POST /accounts/{id}/deposit` and `/withdraw`.
#[derive(Debug, Serialize)]
pub struct MoneyRequest {
    pub amount: f64,
}

/// Body for `POST /accounts/transfer`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub from_id: i64,
    pub to_id: i64,
    pub amount: f64,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub full_name: String,
    pub password: String,
}
