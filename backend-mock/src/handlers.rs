/// Axum HTTP handlers for the mock account backend.
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::state::{BankState, StateError};
use crate::types::*;

/// Shared application state
pub type AppState = Arc<BankState>;

impl IntoResponse for StateError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            StateError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            StateError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            StateError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            StateError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            StateError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        };
        (status, message).into_response()
    }
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, StateError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| StateError::Unauthorized("Missing Bearer token".to_string()))
}

fn authed(state: &BankState, headers: &HeaderMap) -> Result<i64, StateError> {
    state.authenticate(bearer_token(headers)?)
}

/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}

/// GET /accounts
/// Lists the authenticated user's accounts
pub async fn list_accounts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<AccountResponse>>, StateError> {
    let user_id = authed(&state, &headers)?;
    Ok(Json(state.list_accounts(user_id)))
}

/// GET /accounts/{id}
pub async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<AccountResponse>, StateError> {
    let user_id = authed(&state, &headers)?;
    Ok(Json(state.get_account(user_id, id)?))
}

/// GET /accounts/{id}/transactions
pub async fn get_transactions(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<Vec<TransactionResponse>>, StateError> {
    let user_id = authed(&state, &headers)?;
    Ok(Json(state.transactions(user_id, id)?))
}

/// POST /accounts/{id}/deposit
pub async fn deposit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(request): Json<MoneyRequest>,
) -> Result<Json<AccountResponse>, StateError> {
    let user_id = authed(&state, &headers)?;
    Ok(Json(state.deposit(user_id, id, request.amount)?))
}

/// POST /accounts/{id}/withdraw
pub async fn withdraw(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(request): Json<MoneyRequest>,
) -> Result<Json<AccountResponse>, StateError> {
    let user_id = authed(&state, &headers)?;
    Ok(Json(state.withdraw(user_id, id, request.amount)?))
}

/// POST /accounts/transfer
pub async fn transfer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<TransferRequest>,
) -> Result<String, StateError> {
    let user_id = authed(&state, &headers)?;
    state.transfer(user_id, request.from_id, request.to_id, request.amount)?;
    Ok("Transfer complete".to_string())
}

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, StateError> {
    let (id, email, full_name) =
        state.register(&request.email, &request.full_name, &request.password)?;
    Ok(Json(UserResponse {
        id,
        email,
        full_name,
    }))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, StateError> {
    let (id, token) = state.login(&request.email, &request.password)?;
    Ok(Json(LoginResponse {
        id,
        email: request.email,
        access_token: token,
    }))
}

/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, StateError> {
    state.logout(bearer_token(&headers)?)?;
    Ok(StatusCode::OK)
}
