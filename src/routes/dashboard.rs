//! Dashboard page loader — soft-gated.
//!
//! This route degrades gracefully: every auth or backend problem becomes an
//! error payload for the page to display instead of a redirect, so a user
//! with a broken session still sees the dashboard shell.

use axum::extract::State;
use axum::response::Json;
use reqwest::Method;
use serde::Serialize;

use crate::services::backend::BackendApi;
use crate::session::RequestContext;
use crate::state::AppState;

/// Load result consumed by the dashboard rendering layer.
#[derive(Debug, Serialize)]
pub struct DashboardLoad {
    #[serde(rename = "dashboardData")]
    pub dashboard_data: Option<serde_json::Value>,
    pub error: Option<String>,
}

impl DashboardLoad {
    fn ok(data: serde_json::Value) -> Self {
        Self { dashboard_data: Some(data), error: None }
    }

    fn err(message: String) -> Self {
        Self { dashboard_data: None, error: Some(message) }
    }
}

/// Fetch dashboard metrics. Never redirects and never propagates a fault:
/// every failure path resolves to an error payload.
pub async fn load(token: Option<&str>, backend: &dyn BackendApi) -> DashboardLoad {
    let Some(token) = token else {
        tracing::error!(route = "dashboard", "no credential in cookies");
        return DashboardLoad::err("Authentication token not found. Please log in.".into());
    };

    let response = match backend.call("/dashboard-stats", Method::GET, Some(token)).await {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(route = "dashboard", error = %e, "stats fetch failed");
            return DashboardLoad::err(e.to_string());
        }
    };

    if response.status == 401 {
        tracing::warn!(route = "dashboard", "stats fetch rejected with 401");
        let detail = if response.body.is_empty() {
            "Invalid or expired token."
        } else {
            response.body.as_str()
        };
        return DashboardLoad::err(format!(
            "Authentication failed (401): {detail} Please log in again."
        ));
    }

    if !response.is_ok() {
        tracing::error!(route = "dashboard", status = response.status, "stats fetch rejected");
        return DashboardLoad::err(format!(
            "Failed to fetch dashboard data (status: {})",
            response.status
        ));
    }

    match response.json() {
        Ok(data) => DashboardLoad::ok(data),
        Err(e) => {
            tracing::error!(route = "dashboard", error = %e, "stats body unparseable");
            DashboardLoad::err(e.to_string())
        }
    }
}

/// `GET /dashboard`
pub async fn page(State(state): State<AppState>, ctx: RequestContext) -> Json<DashboardLoad> {
    Json(load(ctx.token.as_deref(), state.backend.as_ref()).await)
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
