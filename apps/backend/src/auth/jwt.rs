use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, encode, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::auth::claims::{Claims, Identity, Role};
use crate::state::security_config::SecurityConfig;

/// Why a session token could not be produced or trusted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,
    #[error("token signature is invalid")]
    InvalidSignature,
    #[error("token has expired")]
    Expired,
    #[error("failed to encode token: {0}")]
    Encode(String),
}

impl TokenError {
    /// Short, stable reason used in security logs.
    pub const fn reason(&self) -> &'static str {
        match self {
            TokenError::Malformed => "malformed",
            TokenError::InvalidSignature => "invalid_signature",
            TokenError::Expired => "expired",
            TokenError::Encode(_) => "encode_failed",
        }
    }
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    header: Header,
    validation: Validation,
    token_ttl_secs: i64,
}

/// Signs and verifies HS256 session tokens.
///
/// Built once at startup from [`SecurityConfig`] and shared read-only by every
/// request; cloning only bumps a reference count.
#[derive(Clone)]
pub struct TokenCodec {
    keys: Arc<Keys>,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &self.keys.header.alg)
            .field("token_ttl_secs", &self.keys.token_ttl_secs)
            .finish_non_exhaustive()
    }
}

impl TokenCodec {
    pub fn new(security: &SecurityConfig) -> Self {
        // Pin the algorithm to the configured one; exp is always required and checked.
        let mut validation = Validation::new(security.algorithm);
        validation.validate_exp = true;
        validation.leeway = security.leeway_secs;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(&security.jwt_secret),
                decoding: DecodingKey::from_secret(&security.jwt_secret),
                header: Header::new(security.algorithm),
                validation,
                token_ttl_secs: security.token_ttl_secs,
            }),
        }
    }

    /// Sign exactly the given payload.
    pub fn sign(&self, identity: &Identity) -> Result<String, TokenError> {
        encode(&self.keys.header, &Claims::from(identity), &self.keys.encoding)
            .map_err(|e| TokenError::Encode(e.to_string()))
    }

    /// Mint a token for `subject_id` valid from `now` for the configured TTL.
    pub fn issue(
        &self,
        subject_id: i64,
        role: Role,
        now: SystemTime,
    ) -> Result<(String, Identity), TokenError> {
        let issued_at = now
            .duration_since(UNIX_EPOCH)
            .map_err(|_| TokenError::Encode("system clock is before the epoch".to_string()))?
            .as_secs() as i64;

        let expires_at = issued_at
            .checked_add(self.keys.token_ttl_secs)
            .ok_or_else(|| TokenError::Encode("token expiry overflows i64".to_string()))?;

        let identity = Identity {
            subject_id,
            role,
            issued_at,
            expires_at,
        };
        let token = self.sign(&identity)?;
        Ok((token, identity))
    }

    /// Verify signature and expiry, returning the trusted identity.
    ///
    /// Errors:
    /// - Expired token → `TokenError::Expired`
    /// - Signature mismatch → `TokenError::InvalidSignature`
    /// - Anything else (bad structure or header, wrong algorithm, missing or
    ///   mistyped claims) → `TokenError::Malformed`
    pub fn verify(&self, token: &str) -> Result<Identity, TokenError> {
        decode_header(token).map_err(|_| TokenError::Malformed)?;

        // With a readable header, claims are only decoded after the signature
        // matches, so a base64 failure here comes from the signature segment.
        let claims = decode::<Claims>(token, &self.keys.decoding, &self.keys.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature | ErrorKind::Base64(_) => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })?;

        Identity::try_from(claims).map_err(|_| TokenError::Malformed)
    }
}
