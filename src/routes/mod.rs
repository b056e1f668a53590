//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session middleware wraps the whole app and always runs first. The
//! protected page group sits behind the layout guard; `/logout` is outside
//! it so clearing a stale credential never bounces through the guard. The
//! login page itself is rendered elsewhere — here it is only a redirect
//! target.

pub mod dashboard;
pub mod guard;
pub mod logout;
pub mod manage;
pub mod prediction;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::session;
use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let protected = Router::new()
        .route("/dashboard", get(dashboard::page))
        .route("/manage", get(manage::page))
        .route("/prediction", get(prediction::page))
        .route_layer(middleware::from_fn_with_state(state.clone(), guard::require_session));

    Router::new()
        .merge(protected)
        .route("/logout", post(logout::action))
        .route("/healthz", get(healthz))
        .layer(middleware::from_fn(session::attach_credential))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
