//! User API handlers.

use crate::{error::ApiError, AppState};
use axum::extract::{Extension, Json, Path};
use clientele_directory::{list_users, update_user, UpdateUserParams, User};
use serde::Deserialize;
use std::sync::Arc;

/// Request body for `PUT /users/{id}`.
///
/// Absent fields are written as NULL, not skipped.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Handler for `GET /users`. Returns every user row as JSON.
pub async fn list_users_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = tokio::task::spawn_blocking(move || {
        let conn = state.pool.get().map_err(|e| {
            tracing::error!("db connection failed: {}", e);
            ApiError::Internal("Error fetching users")
        })?;
        list_users(&conn).map_err(|e| {
            tracing::error!("user listing failed: {}", e);
            ApiError::Internal("Error fetching users")
        })
    })
    .await
    .map_err(|e| {
        tracing::error!("task join error: {}", e);
        ApiError::Internal("Error fetching users")
    })??;

    Ok(Json(users))
}

/// Handler for `PUT /users/{id}`.
///
/// Rewrites the row's username and email and reports success even when the
/// id matches nothing; the row count is only logged.
pub async fn update_user_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(user_id): Path<i64>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<String, ApiError> {
    let updates = UpdateUserParams {
        username: payload.username,
        email: payload.email,
    };

    let affected = tokio::task::spawn_blocking(move || {
        let conn = state.pool.get().map_err(|e| {
            tracing::error!("db connection failed: {}", e);
            ApiError::Internal("Error updating user")
        })?;
        update_user(&conn, user_id, &updates).map_err(|e| {
            tracing::error!(user_id, "user update failed: {}", e);
            ApiError::Internal("Error updating user")
        })
    })
    .await
    .map_err(|e| {
        tracing::error!("task join error: {}", e);
        ApiError::Internal("Error updating user")
    })??;

    if affected == 0 {
        tracing::debug!(user_id, "user update matched no rows");
    }

    Ok(format!("User with ID {user_id} updated successfully"))
}
