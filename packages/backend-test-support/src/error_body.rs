//! Assertions for the `{success: false, message, code}` failure body.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{HeaderName, CONTENT_TYPE, WWW_AUTHENTICATE};
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Local mirror of the backend's failure body, so this crate does not depend
/// on backend types.
#[derive(Debug, Deserialize)]
pub struct ErrorBodyLike {
    pub success: bool,
    pub message: String,
    pub code: String,
}

/// Assert that a response is a gate/handler failure with the given status,
/// code and message, and return the parsed body.
///
/// Also checks the contract headers:
/// - `x-trace-id` is present and non-empty
/// - 401 responses carry `WWW-Authenticate: Bearer`, others do not
pub async fn assert_error_body(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
    expected_message: &str,
) -> ErrorBodyLike {
    assert_eq!(resp.status(), expected_status);

    let headers = resp.headers().clone();

    let trace_id = headers
        .get(HeaderName::from_static("x-trace-id"))
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present and valid UTF-8");
    assert!(!trace_id.is_empty(), "x-trace-id header should not be empty");

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/json"),
        "Content-Type must be application/json (got {content_type})"
    );

    let www_auth = headers.get(WWW_AUTHENTICATE);
    if expected_status == StatusCode::UNAUTHORIZED {
        assert_eq!(
            www_auth.and_then(|v| v.to_str().ok()),
            Some("Bearer"),
            "401 responses must have WWW-Authenticate: Bearer"
        );
    } else {
        assert!(
            www_auth.is_none(),
            "{expected_status} responses must not have WWW-Authenticate"
        );
    }

    let body = actix_web::test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).expect("Response body should be valid UTF-8");
    let parsed: ErrorBodyLike = serde_json::from_str(body_str)
        .unwrap_or_else(|_| panic!("Failed to parse error body. Raw body: {body_str}"));

    assert!(!parsed.success, "failure body must have success=false");
    assert_eq!(parsed.code, expected_code);
    assert_eq!(parsed.message, expected_message);

    parsed
}
