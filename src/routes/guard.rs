//! Layout-level route guard for the protected page group.
//!
//! DESIGN
//! ======
//! Runs before any page loader in the group. A missing credential redirects
//! without touching the backend; a present one is verified with a single
//! `GET /dashboard` probe. Any failure — transport, non-2xx of any kind, or
//! an unparseable body — revokes access with a redirect to login; 401 is
//! deliberately not distinguished here. On success the parsed body becomes
//! the shared payload for descendant routes.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use reqwest::Method;

use crate::outcome::{Outcome, Redirect};
use crate::services::backend::BackendApi;
use crate::session::{self, RequestContext};
use crate::state::AppState;

/// Backend payload verified by the guard, shared with descendant routes
/// through the request extensions.
#[derive(Debug, Clone)]
pub struct SessionPayload(pub Arc<serde_json::Value>);

/// Verify the session against the backend.
///
/// Never lets an error escape: resolves to either the parsed payload or a
/// redirect directive.
pub async fn verify_session(
    token: Option<&str>,
    backend: &dyn BackendApi,
) -> Outcome<serde_json::Value> {
    let Some(token) = token else {
        tracing::debug!(route = "layout", "no credential, redirecting to login");
        return Outcome::Redirect(Redirect::login());
    };

    let response = match backend.call("/dashboard", Method::GET, Some(token)).await {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(route = "layout", error = %e, "session check unreachable");
            return Outcome::Redirect(Redirect::login());
        }
    };

    if !response.is_ok() {
        tracing::info!(route = "layout", status = response.status, "session rejected by backend");
        return Outcome::Redirect(Redirect::login());
    }

    match response.json() {
        Ok(payload) => Outcome::Ok(payload),
        Err(e) => {
            tracing::warn!(route = "layout", error = %e, "session check returned unparseable body");
            Outcome::Redirect(Redirect::login())
        }
    }
}

/// Axum middleware wrapper: short-circuits with the redirect response or
/// attaches the verified payload and continues into the page loaders.
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let attached = req.extensions().get::<RequestContext>().cloned();
    let token = session::resolve_token(attached.as_ref(), &jar);

    match verify_session(token.as_deref(), state.backend.as_ref()).await {
        Outcome::Ok(payload) => {
            req.extensions_mut().insert(SessionPayload(Arc::new(payload)));
            next.run(req).await
        }
        Outcome::Redirect(redirect) => redirect.into_response(),
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
