use super::*;
use axum::http::StatusCode;
use axum::http::header::{LOCATION, SET_COOKIE};
use axum_extra::extract::cookie::Cookie;

use crate::session::COOKIE_NAME;

// =============================================================================
// logout
// =============================================================================

#[tokio::test]
async fn logout_clears_credential_and_redirects() {
    let jar = CookieJar::new().add(Cookie::new(COOKIE_NAME, "abc123"));

    let response = action(jar).await.into_response();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[LOCATION], "/login");

    let set_cookie = response.headers()[SET_COOKIE].to_str().unwrap();
    assert!(set_cookie.starts_with("token="));
    assert!(set_cookie.contains("Max-Age=0"));
    assert!(set_cookie.contains("Path=/"));
}

#[tokio::test]
async fn logout_is_idempotent_without_credential() {
    let jar = CookieJar::new();

    let response = action(jar).await.into_response();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[LOCATION], "/login");
    let set_cookie = response.headers()[SET_COOKIE].to_str().unwrap();
    assert!(set_cookie.contains("Max-Age=0"));
}
