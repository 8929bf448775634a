use actix_web::error::ResponseError;
use actix_web::http::{header, StatusCode};
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::auth::claims::Role;
use crate::auth::jwt::TokenError;
use crate::errors::ErrorCode;
use crate::trace_ctx;

/// JSON body written for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    pub code: &'static str,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing bearer token")]
    NoToken,
    #[error("Token rejected: {0}")]
    TokenRejected(TokenError),
    #[error("Unauthenticated")]
    Unauthenticated,
    #[error("Role mismatch: requires {required}")]
    RoleMismatch { required: Role },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NoToken => ErrorCode::UnauthorizedMissingToken,
            AppError::TokenRejected(_) => ErrorCode::TokenInvalid,
            AppError::Unauthenticated => ErrorCode::Unauthenticated,
            AppError::RoleMismatch { .. } => ErrorCode::InsufficientRole,
            AppError::Internal { .. } => ErrorCode::Internal,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// User-facing message. Token failures share one message so callers
    /// cannot tell a forged token from an expired one.
    pub fn message(&self) -> String {
        match self {
            AppError::NoToken => "Access token required".to_string(),
            AppError::TokenRejected(_) => "Token invalid or expired".to_string(),
            AppError::Unauthenticated => "Authentication required".to_string(),
            AppError::RoleMismatch { required } => format!("Requires {required} privilege"),
            AppError::Internal { .. } | AppError::Config { .. } => {
                "Internal server error".to_string()
            }
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NoToken => StatusCode::UNAUTHORIZED,
            AppError::TokenRejected(_) => StatusCode::FORBIDDEN,
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::RoleMismatch { .. } => StatusCode::FORBIDDEN,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<TokenError> for AppError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Encode(detail) => AppError::internal(format!("token encoding: {detail}")),
            other => AppError::TokenRejected(other),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let trace_id = trace_ctx::trace_id();

        if status.is_server_error() {
            error!(%trace_id, code = %self.code(), error = %self, "request failed");
        }

        let body = ErrorBody {
            success: false,
            message: self.message(),
            code: self.code().as_str(),
        };

        let mut builder = HttpResponse::build(status);
        builder.insert_header(("x-trace-id", trace_id));
        if status == StatusCode::UNAUTHORIZED {
            builder.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }
        builder.json(body)
    }
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use serde_json::Value;

    use super::*;

    async fn body_of(err: AppError) -> (StatusCode, Value) {
        let resp = err.error_response();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn token_failures_share_one_message() {
        for cause in [
            TokenError::Malformed,
            TokenError::InvalidSignature,
            TokenError::Expired,
        ] {
            let (status, body) = body_of(AppError::TokenRejected(cause)).await;
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert_eq!(body["success"], false);
            assert_eq!(body["message"], "Token invalid or expired");
            assert_eq!(body["code"], "TOKEN_INVALID");
        }
    }

    #[actix_web::test]
    async fn unauthorized_carries_www_authenticate() {
        let resp = AppError::NoToken.error_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            resp.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
        assert!(resp.headers().get("x-trace-id").is_some());

        let resp = AppError::RoleMismatch {
            required: Role::Admin,
        }
        .error_response();
        assert!(resp.headers().get(header::WWW_AUTHENTICATE).is_none());
    }

    #[actix_web::test]
    async fn role_mismatch_names_the_role() {
        let (status, body) = body_of(AppError::RoleMismatch {
            required: Role::Admin,
        })
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "Requires admin privilege");
    }

    #[actix_web::test]
    async fn internal_detail_is_not_leaked() {
        let (status, body) = body_of(AppError::internal("secret detail")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal server error");
    }

    #[test]
    fn encode_failures_become_internal() {
        let err: AppError = TokenError::Encode("boom".to_string()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err: AppError = TokenError::Expired.into();
        assert_eq!(err.status(), StatusCode::FORBIDDEN);
    }
}
