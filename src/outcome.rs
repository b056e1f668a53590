//! Redirect-as-value control flow shared by the route guard and loaders.
//!
//! DESIGN
//! ======
//! A redirect is an ordinary return value, not a non-local exit. Guards and
//! loaders resolve to either a payload or a `Redirect`, and each layer above
//! them decides whether to propagate or act on it.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Path of the externally-rendered login page.
pub const LOGIN_PATH: &str = "/login";

// =============================================================================
// REDIRECT DIRECTIVE
// =============================================================================

/// Instruction to abort normal rendering and send the browser elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// Target location, absolute path plus optional query.
    pub to: String,
    /// Always `302 Found` in this system.
    pub status: StatusCode,
    /// When set, the HTTP layer must also expire the credential cookie.
    pub clear_credential: bool,
}

impl Redirect {
    /// Plain redirect to the login page.
    #[must_use]
    pub fn login() -> Self {
        Self { to: LOGIN_PATH.into(), status: StatusCode::FOUND, clear_credential: false }
    }

    /// Redirect to the login page carrying a `message` query parameter.
    #[must_use]
    pub fn login_with_message(message: &str) -> Self {
        Self {
            to: format!("{LOGIN_PATH}?message={message}"),
            status: StatusCode::FOUND,
            clear_credential: false,
        }
    }

    /// Mark the directive as also expiring the stored credential.
    #[must_use]
    pub fn clearing_credential(mut self) -> Self {
        self.clear_credential = true;
        self
    }
}

impl IntoResponse for Redirect {
    fn into_response(self) -> Response {
        // Built by hand: axum's `Redirect::temporary` emits 307, the
        // protocol here is 302.
        (self.status, [(header::LOCATION, self.to)]).into_response()
    }
}

// =============================================================================
// OUTCOME
// =============================================================================

/// Result of a guard or hard-gated loader: a payload, or a redirect.
#[derive(Debug)]
pub enum Outcome<T> {
    Ok(T),
    Redirect(Redirect),
}

#[cfg(test)]
#[path = "outcome_test.rs"]
mod tests;
