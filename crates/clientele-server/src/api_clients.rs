//! Client API handlers.

use crate::{error::ApiError, AppState};
use axum::extract::{Extension, Json, Path};
use clientele_directory::{insert_client, update_client, CreateClientParams, UpdateClientParams};
use serde::Deserialize;
use std::sync::Arc;

/// Referential check consulted before inserting a client.
///
/// A real checker would look the ids up in the database. The server wires
/// in [`AssumeExists`], which accepts everything; the trait exists so tests
/// can inject a failing answer.
pub trait ExistenceChecker: Send + Sync {
    fn company_exists(&self, company_id: Option<i64>) -> bool;
    fn user_exists(&self, user_id: Option<i64>) -> bool;
}

/// Accepts every referenced id, including absent ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeExists;

impl ExistenceChecker for AssumeExists {
    fn company_exists(&self, _company_id: Option<i64>) -> bool {
        true
    }

    fn user_exists(&self, _user_id: Option<i64>) -> bool {
        true
    }
}

/// Request body for `POST /clients`.
#[derive(Debug, Deserialize)]
pub struct CreateClientRequest {
    pub name: Option<String>,
    pub user_id: Option<i64>,
    pub company_id: Option<i64>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Request body for `PUT /clients/{id}`.
///
/// Absent fields are written as NULL, not skipped.
#[derive(Debug, Deserialize)]
pub struct UpdateClientRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Handler for `POST /clients`. Reached only through the admin role gate.
///
/// Runs the referential checks before touching the database; a failed check
/// yields `400 Invalid company or user` and no insert.
pub async fn create_client_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<CreateClientRequest>,
) -> Result<String, ApiError> {
    if !state.existence.company_exists(payload.company_id)
        || !state.existence.user_exists(payload.user_id)
    {
        return Err(ApiError::InvalidReference);
    }

    let params = CreateClientParams {
        name: payload.name,
        user_id: payload.user_id,
        company_id: payload.company_id,
        email: payload.email,
        phone: payload.phone,
    };

    let client_id = tokio::task::spawn_blocking(move || {
        let conn = state.pool.get().map_err(|e| {
            tracing::error!("db connection failed: {}", e);
            ApiError::Internal("Error creating client")
        })?;
        insert_client(&conn, &params).map_err(|e| {
            tracing::error!("client insert failed: {}", e);
            ApiError::Internal("Error creating client")
        })
    })
    .await
    .map_err(|e| {
        tracing::error!("task join error: {}", e);
        ApiError::Internal("Error creating client")
    })??;

    tracing::debug!(client_id, "created client row");

    Ok("Client created successfully".to_string())
}

/// Handler for `PUT /clients/{id}`.
///
/// Rewrites the row's name, email, and phone and reports success even when
/// the id matches nothing; the row count is only logged. Not role gated.
pub async fn update_client_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(client_id): Path<i64>,
    Json(payload): Json<UpdateClientRequest>,
) -> Result<String, ApiError> {
    let updates = UpdateClientParams {
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
    };

    let affected = tokio::task::spawn_blocking(move || {
        let conn = state.pool.get().map_err(|e| {
            tracing::error!("db connection failed: {}", e);
            ApiError::Internal("Error updating client")
        })?;
        update_client(&conn, client_id, &updates).map_err(|e| {
            tracing::error!(client_id, "client update failed: {}", e);
            ApiError::Internal("Error updating client")
        })
    })
    .await
    .map_err(|e| {
        tracing::error!("task join error: {}", e);
        ApiError::Internal("Error updating client")
    })??;

    if affected == 0 {
        tracing::debug!(client_id, "client update matched no rows");
    }

    Ok(format!("Client with ID {client_id} updated successfully"))
}
