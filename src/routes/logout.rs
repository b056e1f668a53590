//! Logout handler.

use axum::response::IntoResponse;
use axum_extra::extract::cookie::CookieJar;

use crate::outcome::Redirect;
use crate::session;

/// `POST /logout` — expire the credential cookie and redirect to login.
/// Idempotent: clearing an absent credential is not an error.
pub async fn action(jar: CookieJar) -> impl IntoResponse {
    tracing::info!(route = "logout", "credential cleared");
    let jar = jar.add(session::removal_cookie());
    (jar, Redirect::login())
}

#[cfg(test)]
#[path = "logout_test.rs"]
mod tests;
