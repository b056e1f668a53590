use super::*;
use crate::services::backend::testing::StubBackend;

// =============================================================================
// hard gate — missing credential
// =============================================================================

#[tokio::test]
async fn missing_credential_redirects_without_backend_call() {
    let stub = StubBackend::new();

    let outcome = load(None, &stub).await;

    let Outcome::Redirect(redirect) = outcome else {
        panic!("expected redirect");
    };
    assert_eq!(redirect.to, "/login");
    assert!(!redirect.clear_credential);
    assert_eq!(stub.call_count(), 0);
}

// =============================================================================
// 401 policy — clear credential, redirect with message
// =============================================================================

#[tokio::test]
async fn rejected_401_clears_credential_and_redirects_with_message() {
    let stub = StubBackend::with_response(401, "");

    let outcome = load(Some("expired"), &stub).await;

    let Outcome::Redirect(redirect) = outcome else {
        panic!("expected redirect");
    };
    assert!(redirect.clear_credential);
    assert_eq!(redirect.to, "/login?message=Session expired or invalid. Please log in again.");
}

// =============================================================================
// other backend responses
// =============================================================================

#[tokio::test]
async fn students_fetch_uses_bearer_token() {
    let stub = StubBackend::with_response(200, "[]");

    load(Some("abc123"), &stub).await;

    let calls = stub.calls();
    assert_eq!(calls[0].path, "/students");
    assert_eq!(calls[0].token.as_deref(), Some("abc123"));
}

#[tokio::test]
async fn successful_fetch_returns_students() {
    let body = r#"[{"id":1,"name":"A"}]"#;
    let stub = StubBackend::with_response(200, body);

    let outcome = load(Some("abc123"), &stub).await;

    let Outcome::Ok(result) = outcome else {
        panic!("expected students");
    };
    assert!(result.error.is_none());
    assert_eq!(
        result.students.unwrap(),
        serde_json::from_str::<serde_json::Value>(body).unwrap()
    );
}

#[tokio::test]
async fn null_student_list_normalizes_to_empty_array() {
    let stub = StubBackend::with_response(200, "null");

    let outcome = load(Some("abc123"), &stub).await;

    let Outcome::Ok(result) = outcome else {
        panic!("expected students");
    };
    assert_eq!(result.students.unwrap(), serde_json::json!([]));
}

#[tokio::test]
async fn empty_body_normalizes_to_empty_array() {
    let stub = StubBackend::with_response(200, "");

    let outcome = load(Some("abc123"), &stub).await;

    let Outcome::Ok(result) = outcome else {
        panic!("expected students");
    };
    assert_eq!(result.students.unwrap(), serde_json::json!([]));
}

#[tokio::test]
async fn other_rejection_degrades_to_error_payload() {
    let stub = StubBackend::with_response(500, "internal");

    let outcome = load(Some("abc123"), &stub).await;

    let Outcome::Ok(result) = outcome else {
        panic!("expected soft error payload");
    };
    assert!(result.students.is_none());
    assert_eq!(result.error.as_deref(), Some("Failed to load student data (status: 500)"));
}

#[tokio::test]
async fn unreachable_backend_redirects_with_generic_message() {
    let stub = StubBackend::with_transport_error("connection refused");

    let outcome = load(Some("abc123"), &stub).await;

    let Outcome::Redirect(redirect) = outcome else {
        panic!("expected redirect");
    };
    assert_eq!(redirect.to, "/login?message=Error loading prediction page data.");
    assert!(!redirect.clear_credential);
}

#[tokio::test]
async fn unparseable_body_redirects_with_generic_message() {
    let stub = StubBackend::with_response(200, "not json");

    let outcome = load(Some("abc123"), &stub).await;

    assert!(matches!(
        outcome,
        Outcome::Redirect(ref r) if r.to == "/login?message=Error loading prediction page data."
    ));
}
