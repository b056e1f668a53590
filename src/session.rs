//! Credential cookie access and per-request session context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session cookie is an opaque bearer token issued by the backend at
//! login. This module is the only place that knows the cookie's name and
//! attributes; everything downstream works with the extracted token.
//!
//! The middleware attaches a `RequestContext` to every request. Guards and
//! loaders must still tolerate the context being absent, so the extractor
//! falls back to re-reading the cookie jar.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Request};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::config;

/// Name of the credential cookie.
pub const COOKIE_NAME: &str = "token";

// =============================================================================
// TOKEN STORE ACCESSOR
// =============================================================================

/// Read the credential from the cookie jar. An empty value counts as absent.
pub fn credential_from_jar(jar: &CookieJar) -> Option<String> {
    jar.get(COOKIE_NAME)
        .map(|c| c.value().to_owned())
        .filter(|token| !token.is_empty())
}

/// Expired cookie that deletes the credential, scoped to path `/`.
#[must_use]
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config::cookie_secure())
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// REQUEST CONTEXT
// =============================================================================

/// Per-request session context, created by [`attach_credential`] and
/// discarded when the request ends.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Extracted credential, `None` when the cookie is missing or empty.
    pub token: Option<String>,
}

/// Resolve the credential: attached context first, cookie jar as fallback.
pub fn resolve_token(ctx: Option<&RequestContext>, jar: &CookieJar) -> Option<String> {
    ctx.and_then(|c| c.token.clone())
        .or_else(|| credential_from_jar(jar))
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let attached = parts.extensions.get::<RequestContext>().cloned();
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(Self { token: resolve_token(attached.as_ref(), &jar) })
    }
}

// =============================================================================
// SESSION MIDDLEWARE
// =============================================================================

/// Extract the credential once per request and attach it to the request
/// extensions. Always continues the chain; never redirects or fails.
pub async fn attach_credential(jar: CookieJar, mut req: Request, next: Next) -> Response {
    let ctx = RequestContext { token: credential_from_jar(&jar) };
    req.extensions_mut().insert(ctx);
    next.run(req).await
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
