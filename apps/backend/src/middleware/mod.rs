pub mod auth_gate;
pub mod cors;
pub mod request_trace;
pub mod role_guard;
pub mod structured_logger;
pub mod trace_span;

pub use auth_gate::{AuthGate, OptionalAuthGate};
pub use cors::cors_middleware;
pub use request_trace::RequestTrace;
pub use role_guard::{authorize, RequireRole};
pub use structured_logger::StructuredLogger;
pub use trace_span::TraceSpan;
