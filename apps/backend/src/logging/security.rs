use tracing::warn;

use crate::auth::claims::{Identity, Role};
use crate::auth::jwt::TokenError;
use crate::trace_ctx;

/// Log a protected request that arrived without a bearer token.
pub fn token_missing(path: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_TOKEN_MISSING",
        %trace_id,
        path,
        "Bearer token required"
    );
}

/// Log a rejected bearer token. The precise reason stays server-side; the
/// client only ever sees the generic message.
pub fn token_rejected(path: &str, err: &TokenError) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_TOKEN_REJECTED",
        %trace_id,
        path,
        reason = err.reason(),
        "Token rejected"
    );
}

/// Log an authenticated request refused for lack of privilege.
pub fn role_denied(path: &str, identity: &Identity, required: Role) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_ROLE_DENIED",
        %trace_id,
        path,
        subject_id = identity.subject_id,
        role = %identity.role,
        required = %required,
        "Insufficient role"
    );
}
