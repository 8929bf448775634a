use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is unset: request and security events from the
/// gallery backend, server lifecycle noise only when it is a warning.
pub const DEFAULT_LOG_FILTER: &str = "warn,gallery_backend=info,actix_web=info";

/// Install the process-wide JSON subscriber for the server binary.
///
/// Events are flattened so `trace_id` and `subject_id` sit at the top level of
/// each line, next to the fields of the enclosing `request` span.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let json_layer = fmt::layer()
        .json()
        .flatten_event(true)
        .with_current_span(true)
        .with_span_list(false)
        .with_target(false)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .init();
}
