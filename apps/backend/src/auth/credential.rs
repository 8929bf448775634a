//! Bearer credential extraction shared by the required and optional auth gates.
//!
//! Both gates run the same state machine: a request either carries no token,
//! or carries one that verifies, or carries one that is rejected. They differ
//! only in how they react to the first and last outcomes.

use actix_web::http::header::{HeaderMap, AUTHORIZATION};

use crate::auth::claims::Identity;
use crate::auth::jwt::{TokenCodec, TokenError};
use crate::error::AppError;

/// Outcome of looking for and verifying a bearer token on a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// No `Authorization: Bearer <token>` header was present.
    NoToken,
    /// A token was present and verified.
    Verified(Identity),
    /// A token was present but failed verification.
    Rejected(TokenError),
}

impl Credential {
    /// Required-auth reaction: only a verified token lets the request through.
    pub fn into_required(self) -> Result<Identity, AppError> {
        match self {
            Credential::Verified(identity) => Ok(identity),
            Credential::NoToken => Err(AppError::NoToken),
            Credential::Rejected(err) => Err(AppError::TokenRejected(err)),
        }
    }

    /// Optional-auth reaction: anything short of a verified token is anonymous.
    pub fn into_optional(self) -> Option<Identity> {
        match self {
            Credential::Verified(identity) => Some(identity),
            Credential::NoToken | Credential::Rejected(_) => None,
        }
    }
}

/// Return the token segment of an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively. A missing header, a non-ASCII
/// value, another scheme, or a missing/extra segment all yield `None`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;

    let mut parts = value.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;
    if parts.next().is_some() || !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }

    Some(token)
}

/// Extract the bearer token, if any, and verify it. The codec is only
/// consulted when a token segment is present.
pub fn extract_and_verify(headers: &HeaderMap, codec: &TokenCodec) -> Credential {
    match bearer_token(headers) {
        None => Credential::NoToken,
        Some(token) => match codec.verify(token) {
            Ok(identity) => Credential::Verified(identity),
            Err(err) => Credential::Rejected(err),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use actix_web::http::header::{HeaderMap, HeaderValue, AUTHORIZATION};

    use super::*;
    use crate::auth::claims::Role;
    use crate::state::security_config::SecurityConfig;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn bearer_token_parsing() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
        assert_eq!(bearer_token(&headers_with("Bearer abc.def.ghi")), Some("abc.def.ghi"));
        assert_eq!(bearer_token(&headers_with("bearer abc")), Some("abc"));
        assert_eq!(bearer_token(&headers_with("Bearer   abc  ")), Some("abc"));

        for value in ["Bearer", "Bearer ", "Basic abc123", "Token abc", "abc123", "Bearer a b"] {
            assert_eq!(bearer_token(&headers_with(value)), None, "{value:?}");
        }
    }

    #[test]
    fn non_ascii_header_is_no_token() {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_bytes(b"Bearer \xfftoken").unwrap(),
        );
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn extract_and_verify_covers_every_outcome() {
        let codec = TokenCodec::new(&SecurityConfig::default());
        let (token, identity) = codec.issue(11, Role::User, SystemTime::now()).unwrap();

        assert_eq!(
            extract_and_verify(&HeaderMap::new(), &codec),
            Credential::NoToken
        );
        assert_eq!(
            extract_and_verify(&headers_with(&format!("Bearer {token}")), &codec),
            Credential::Verified(identity)
        );
        assert_eq!(
            extract_and_verify(&headers_with("Bearer nope"), &codec),
            Credential::Rejected(TokenError::Malformed)
        );
    }

    #[test]
    fn reactions_differ_only_on_failure() {
        let identity = Identity {
            subject_id: 1,
            role: Role::User,
            issued_at: 0,
            expires_at: 1,
        };

        assert_eq!(
            Credential::Verified(identity.clone()).into_required().unwrap(),
            identity
        );
        assert!(matches!(
            Credential::NoToken.into_required(),
            Err(AppError::NoToken)
        ));
        assert!(matches!(
            Credential::Rejected(TokenError::Expired).into_required(),
            Err(AppError::TokenRejected(TokenError::Expired))
        ));

        assert_eq!(
            Credential::Verified(identity.clone()).into_optional(),
            Some(identity)
        );
        assert_eq!(Credential::NoToken.into_optional(), None);
        assert_eq!(
            Credential::Rejected(TokenError::InvalidSignature).into_optional(),
            None
        );
    }
}
