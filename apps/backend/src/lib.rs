#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;
pub mod trace_ctx;

// Re-exports for public API
pub use auth::claims::{Identity, Role};
pub use auth::credential::{extract_and_verify, Credential};
pub use auth::jwt::{TokenCodec, TokenError};
pub use config::AppConfig;
pub use error::AppError;
pub use middleware::{
    cors_middleware, AuthGate, OptionalAuthGate, RequestTrace, RequireRole, StructuredLogger,
    TraceSpan,
};
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

// Unit tests share the integration tests' log setup
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
