//! Clientele server library logic.

pub mod api_clients;
pub mod api_users;
pub mod config;
pub mod error;
pub mod middleware;

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::Request,
    middleware::Next,
    routing::{get, post, put},
    Extension, Json, Router,
};
use clientele_db::DbPool;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use api_clients::ExistenceChecker;
use middleware::{IdentityProvider, Role};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: DbPool,
    /// Source of the caller's role for the authorization gate.
    pub identity: Arc<dyn IdentityProvider>,
    /// Referential check consulted before client creation.
    pub existence: Arc<dyn ExistenceChecker>,
}

/// Maximum request body size (1 MiB).
const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;

/// Health check handler.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Builds the application router with all routes.
///
/// Only `POST /clients` sits behind the admin role gate; every other route
/// is open.
pub fn app(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/clients", post(api_clients::create_client_handler))
        .layer(axum::middleware::from_fn(
            |req: Request<Body>, next: Next| middleware::authorize(Role::Admin, req, next),
        ));

    Router::new()
        .route("/health", get(health))
        .route("/users", get(api_users::list_users_handler))
        .route("/users/{id}", put(api_users::update_user_handler))
        .route("/clients/{id}", put(api_clients::update_client_handler))
        .merge(admin_routes)
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(Extension(Arc::new(state)))
}
