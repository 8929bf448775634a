#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde_json::Value;

// Logging is auto-installed for every test binary that declares `mod common;`
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Read a successful `{success: true, data}` envelope and return `data`.
pub async fn read_success_data(resp: ServiceResponse<BoxBody>) -> Value {
    assert!(
        resp.status().is_success(),
        "expected success, got {}",
        resp.status()
    );
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true, "success flag should be true: {body}");
    body["data"].clone()
}
