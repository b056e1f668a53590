//! Manage page loader — hard-gated.
//!
//! Any auth problem or backend failure on this route forces a re-login; the
//! student list is passed through to rendering unchanged.

use axum::extract::State;
use axum::response::{IntoResponse, Json, Response};
use reqwest::Method;
use serde::Serialize;

use crate::outcome::{Outcome, Redirect};
use crate::services::backend::BackendApi;
use crate::session::RequestContext;
use crate::state::AppState;

/// Load result consumed by the manage rendering layer.
#[derive(Debug, Serialize)]
pub struct ManageLoad {
    pub students: serde_json::Value,
}

/// Fetch the student list, redirecting to login on every failure path.
pub async fn load(token: Option<&str>, backend: &dyn BackendApi) -> Outcome<ManageLoad> {
    let Some(token) = token else {
        tracing::debug!(route = "manage", "no credential, redirecting to login");
        return Outcome::Redirect(Redirect::login());
    };

    let response = match backend.call("/students", Method::GET, Some(token)).await {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(route = "manage", error = %e, "students fetch failed");
            return Outcome::Redirect(Redirect::login());
        }
    };

    if !response.is_ok() {
        tracing::info!(route = "manage", status = response.status, "students fetch rejected");
        return Outcome::Redirect(Redirect::login());
    }

    match response.json() {
        Ok(students) => Outcome::Ok(ManageLoad { students }),
        Err(e) => {
            tracing::warn!(route = "manage", error = %e, "students body unparseable");
            Outcome::Redirect(Redirect::login())
        }
    }
}

/// `GET /manage`
pub async fn page(State(state): State<AppState>, ctx: RequestContext) -> Response {
    match load(ctx.token.as_deref(), state.backend.as_ref()).await {
        Outcome::Ok(result) => Json(result).into_response(),
        Outcome::Redirect(redirect) => redirect.into_response(),
    }
}

#[cfg(test)]
#[path = "manage_test.rs"]
mod tests;
