//! Account endpoints.

use std::sync::Arc;

use application::{CreateAccount, Dispatcher, GetAccountDetails};
use axum::Json;
use axum::extract::{Path, State};
use domain::Account;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Shared application state accessible from all route handlers.
///
/// The dispatcher is the only entry point into the core; routes translate
/// HTTP to request values and back, nothing more.
pub struct AppState {
    pub dispatcher: Dispatcher,
}

// -- Request types --

#[derive(Deserialize)]
pub struct CreateAccountRequest {
    pub name: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

// -- Response types --

#[derive(Serialize)]
pub struct AccountResponse {
    pub id: String,
    pub name_key: String,
    pub name: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub edit_enabled: bool,
    pub delete_enabled: bool,
}

impl AccountResponse {
    fn from_account(account: Account, edit_enabled: bool, delete_enabled: bool) -> Self {
        Self {
            id: account.id.to_string(),
            name_key: account.name_key.to_string(),
            name: account.name,
            email: account.email,
            first_name: account.first_name,
            last_name: account.last_name,
            edit_enabled,
            delete_enabled,
        }
    }
}

#[derive(Serialize)]
pub struct AccountCreatedResponse {
    pub id: String,
    pub name_key: String,
    pub message: String,
}

// -- Handlers --

/// GET /accounts/{name} — look up account details by display name or key.
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<AccountResponse>, ApiError> {
    let view = state
        .dispatcher
        .dispatch(GetAccountDetails::new(name.clone()))
        .await?;

    match view.account {
        Some(account) => Ok(Json(AccountResponse::from_account(
            account,
            view.edit_enabled,
            view.delete_enabled,
        ))),
        None => Err(ApiError::NotFound(format!("no account matches `{name}`"))),
    }
}

/// POST /accounts — register a new account.
#[tracing::instrument(skip(state, req))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateAccountRequest>,
) -> Result<(axum::http::StatusCode, Json<AccountCreatedResponse>), ApiError> {
    let command = CreateAccount {
        name: req.name,
        email: req.email,
        first_name: req.first_name,
        last_name: req.last_name,
    };

    let response = state.dispatcher.dispatch(command).await?;
    if !response.success {
        return Err(ApiError::BadRequest(response.message));
    }
    let account = response
        .account
        .ok_or_else(|| ApiError::Internal("create succeeded without an account".to_string()))?;

    Ok((
        axum::http::StatusCode::CREATED,
        Json(AccountCreatedResponse {
            id: account.id.to_string(),
            name_key: account.name_key.to_string(),
            message: response.message,
        }),
    ))
}
