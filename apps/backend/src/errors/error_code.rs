//! Error codes for the gallery backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the gallery backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// No bearer token was supplied
    UnauthorizedMissingToken,
    /// A bearer token was supplied but is malformed, forged or expired
    TokenInvalid,
    /// A route needed an identity but none was attached to the request
    Unauthenticated,
    /// The identity's role does not grant this operation
    InsufficientRole,

    // System Errors
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnauthorizedMissingToken => "UNAUTHORIZED_MISSING_TOKEN",
            Self::TokenInvalid => "TOKEN_INVALID",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::InsufficientRole => "INSUFFICIENT_ROLE",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
