//! Buyer and seller endpoints
//!
//! `/buyers` and `/sellers` share one implementation; the thin handlers
//! below only pick the `AccountKind`.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::MessageResponse;
use crate::db::repos::{Account, AccountKind, AccountRepo, NewAccount};
use crate::http::error::ApiError;
use crate::http::extractors::{Params, ValidId};
use crate::http::server::AppState;
use crate::models::PasswordDigest;

/// Create account request; every field may be omitted
#[derive(Deserialize)]
pub struct CreateAccountRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

pub(super) async fn list_buyers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Account>>, ApiError> {
    list_accounts(state, AccountKind::Buyer).await
}

pub(super) async fn create_buyer(
    State(state): State<Arc<AppState>>,
    Params(req): Params<CreateAccountRequest>,
) -> Result<Json<Account>, ApiError> {
    create_account(state, AccountKind::Buyer, req).await
}

pub(super) async fn delete_buyer(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<MessageResponse>, ApiError> {
    delete_account(state, AccountKind::Buyer, id).await
}

pub(super) async fn list_sellers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Account>>, ApiError> {
    list_accounts(state, AccountKind::Seller).await
}

pub(super) async fn create_seller(
    State(state): State<Arc<AppState>>,
    Params(req): Params<CreateAccountRequest>,
) -> Result<Json<Account>, ApiError> {
    create_account(state, AccountKind::Seller, req).await
}

pub(super) async fn delete_seller(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<MessageResponse>, ApiError> {
    delete_account(state, AccountKind::Seller, id).await
}

/// GET /buyers, GET /sellers
async fn list_accounts(
    state: Arc<AppState>,
    kind: AccountKind,
) -> Result<Json<Vec<Account>>, ApiError> {
    let accounts = AccountRepo::new(&state.pool, kind).list().await?;
    Ok(Json(accounts))
}

/// POST /buyers, POST /sellers
async fn create_account(
    state: Arc<AppState>,
    kind: AccountKind,
    req: CreateAccountRequest,
) -> Result<Json<Account>, ApiError> {
    let password = match req.password {
        Some(plaintext) => Some(hash_password(plaintext).await?),
        None => None,
    };

    let account = AccountRepo::new(&state.pool, kind)
        .create(NewAccount {
            name: req.name,
            email: req.email,
            password,
        })
        .await?;

    Ok(Json(account))
}

/// DELETE /buyers/{id}, DELETE /sellers/{id}
async fn delete_account(
    state: Arc<AppState>,
    kind: AccountKind,
    id: i64,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = AccountRepo::new(&state.pool, kind).delete(id).await?;
    Ok(Json(MessageResponse { message }))
}

/// Argon2 is CPU-bound, so hashing runs off the async workers.
async fn hash_password(plaintext: String) -> Result<PasswordDigest, ApiError> {
    let digest = tokio::task::spawn_blocking(move || PasswordDigest::hash(&plaintext))
        .await
        .map_err(|e| ApiError::Internal {
            message: format!("password hashing task failed: {e}"),
        })??;
    Ok(digest)
}
