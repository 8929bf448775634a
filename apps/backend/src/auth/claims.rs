//! Session token payload and the request-scoped identity decoded from it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse privilege tier carried in every session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claims as they appear on the wire inside the signed token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject identifier (users.id), decimal string per RFC 7519
    pub sub: String,
    pub role: Role,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// Trusted identity attached to a request once its token has been verified.
///
/// Inserted into request extensions by the auth gates and read back by
/// handlers through the `FromRequest` impl in `extractors::identity`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Identity {
    pub subject_id: i64,
    pub role: Role,
    pub issued_at: i64,
    pub expires_at: i64,
}

impl From<&Identity> for Claims {
    fn from(identity: &Identity) -> Self {
        Self {
            sub: identity.subject_id.to_string(),
            role: identity.role,
            iat: identity.issued_at,
            exp: identity.expires_at,
        }
    }
}

impl TryFrom<Claims> for Identity {
    type Error = std::num::ParseIntError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        Ok(Self {
            subject_id: claims.sub.parse()?,
            role: claims.role,
            issued_at: claims.iat,
            expires_at: claims.exp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
    }

    #[test]
    fn claims_and_identity_convert_both_ways() {
        let identity = Identity {
            subject_id: 7,
            role: Role::Admin,
            issued_at: 1_700_000_000,
            expires_at: 1_700_003_600,
        };

        let claims = Claims::from(&identity);
        assert_eq!(claims.sub, "7");
        assert_eq!(Identity::try_from(claims).unwrap(), identity);
    }

    #[test]
    fn non_numeric_subject_is_rejected() {
        let claims = Claims {
            sub: "user-abc".to_string(),
            role: Role::User,
            iat: 0,
            exp: 1,
        };
        assert!(Identity::try_from(claims).is_err());
    }
}
