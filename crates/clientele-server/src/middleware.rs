use axum::{
    body::Body,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::{error::ApiError, AppState};

/// Roles understood by the authorization gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Returns the string label for this role.
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "ROLE_ADMIN",
            Role::User => "ROLE_USER",
        }
    }
}

/// Source of the caller's role for a request.
///
/// A real provider would derive the role from request credentials. The
/// server currently wires in [`StaticIdentity`], which ignores the request
/// entirely; the trait exists so tests can inject other answers.
pub trait IdentityProvider: Send + Sync {
    fn current_role(&self, headers: &HeaderMap) -> Option<Role>;
}

/// Reports the same role for every request, regardless of headers.
#[derive(Debug, Clone, Copy)]
pub struct StaticIdentity(pub Role);

impl IdentityProvider for StaticIdentity {
    fn current_role(&self, _headers: &HeaderMap) -> Option<Role> {
        Some(self.0)
    }
}

/// Middleware that admits a request only when the caller holds `required`.
///
/// The role comes from the [`IdentityProvider`] in [`AppState`]; a missing
/// or mismatched role yields `403 Unauthorized` with a fixed body.
pub async fn authorize(
    required: Role,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let state = req
        .extensions()
        .get::<Arc<AppState>>()
        .ok_or(ApiError::Internal("Internal server error"))?
        .clone();

    let held = state.identity.current_role(req.headers());
    match held {
        Some(role) if role == required => Ok(next.run(req).await),
        _ => {
            tracing::debug!(
                required = required.label(),
                held = held.map(Role::label).unwrap_or("<none>"),
                path = req.uri().path(),
                "rejecting request without the required role"
            );
            Err(ApiError::Forbidden)
        }
    }
}
