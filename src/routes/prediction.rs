//! Prediction page loader — hard-gated, with a distinguished 401 policy.
//!
//! DESIGN
//! ======
//! A 401 here is treated as session expiry: the stored credential is cleared
//! and the user is bounced to login with an explanatory message. Other
//! backend rejections degrade to an error payload so the page can report the
//! status. Transport failures redirect with a generic message. An empty or
//! null student list is normalized to an empty array, never null.

use axum::extract::State;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::CookieJar;
use reqwest::Method;
use serde::Serialize;

use crate::outcome::{Outcome, Redirect};
use crate::services::backend::BackendApi;
use crate::session::{self, RequestContext};
use crate::state::AppState;

const SESSION_EXPIRED_MESSAGE: &str = "Session expired or invalid. Please log in again.";
const LOAD_FAILED_MESSAGE: &str = "Error loading prediction page data.";

/// Load result consumed by the prediction rendering layer.
#[derive(Debug, Serialize)]
pub struct PredictionLoad {
    pub students: Option<serde_json::Value>,
    pub error: Option<String>,
}

/// Fetch the student list for the prediction page.
pub async fn load(token: Option<&str>, backend: &dyn BackendApi) -> Outcome<PredictionLoad> {
    let Some(token) = token else {
        tracing::debug!(route = "prediction", "no credential, redirecting to login");
        return Outcome::Redirect(Redirect::login());
    };

    let response = match backend.call("/students", Method::GET, Some(token)).await {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(route = "prediction", error = %e, "students fetch failed");
            return Outcome::Redirect(Redirect::login_with_message(LOAD_FAILED_MESSAGE));
        }
    };

    if response.status == 401 {
        tracing::info!(route = "prediction", "credential rejected, clearing and redirecting");
        return Outcome::Redirect(
            Redirect::login_with_message(SESSION_EXPIRED_MESSAGE).clearing_credential(),
        );
    }

    if !response.is_ok() {
        tracing::warn!(route = "prediction", status = response.status, "students fetch rejected");
        return Outcome::Ok(PredictionLoad {
            students: None,
            error: Some(format!("Failed to load student data (status: {})", response.status)),
        });
    }

    // The backend may answer an empty roster with `null` or nothing at all.
    if response.body.trim().is_empty() {
        return Outcome::Ok(PredictionLoad { students: Some(serde_json::json!([])), error: None });
    }

    match response.json() {
        Ok(students) => {
            let students = if students.is_null() { serde_json::json!([]) } else { students };
            Outcome::Ok(PredictionLoad { students: Some(students), error: None })
        }
        Err(e) => {
            tracing::warn!(route = "prediction", error = %e, "students body unparseable");
            Outcome::Redirect(Redirect::login_with_message(LOAD_FAILED_MESSAGE))
        }
    }
}

/// `GET /prediction`
pub async fn page(State(state): State<AppState>, ctx: RequestContext, jar: CookieJar) -> Response {
    match load(ctx.token.as_deref(), state.backend.as_ref()).await {
        Outcome::Ok(result) => Json(result).into_response(),
        Outcome::Redirect(redirect) if redirect.clear_credential => {
            let jar = jar.add(session::removal_cookie());
            (jar, redirect).into_response()
        }
        Outcome::Redirect(redirect) => redirect.into_response(),
    }
}

#[cfg(test)]
#[path = "prediction_test.rs"]
mod tests;
