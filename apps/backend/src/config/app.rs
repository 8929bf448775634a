//! Application configuration loaded once at startup from environment variables.
//!
//! Nothing below `main` reads the environment; the resulting [`AppConfig`] is
//! passed down explicitly (the token codec and the gates are built from it).

use std::env;

use tracing::warn;

use crate::error::AppError;
use crate::state::security_config::{
    SecurityConfig, DEFAULT_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS,
};

/// Development-only signing secret used when `JWT_SECRET` is not set.
/// Rejected outright in production.
pub const DEV_FALLBACK_JWT_SECRET: &str = "porcelain-gallery-dev-secret-change-me";

const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://127.0.0.1:5173"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Dev,
    Test,
    Prod,
}

impl RuntimeEnv {
    fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("production") | Some("prod") => RuntimeEnv::Prod,
            Some("test") => RuntimeEnv::Test,
            _ => RuntimeEnv::Dev,
        }
    }
}

/// Centralized application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    // Server configuration
    pub host: String,
    pub port: u16,
    pub runtime_env: RuntimeEnv,

    // Security configuration
    pub jwt_secret: String,
    pub token_ttl_secs: i64,

    // Browser origins allowed to call the API
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Load and validate all configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let runtime_env = RuntimeEnv::parse(lookup("APP_ENV").as_deref());

        let host = lookup("BACKEND_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port_str = lookup("BACKEND_PORT").unwrap_or_else(|| "3000".to_string());
        let port = port_str.trim().parse::<u16>().map_err(|_| {
            AppError::config(format!(
                "BACKEND_PORT must be a valid port number, got '{port_str}'"
            ))
        })?;

        let jwt_secret = Self::jwt_secret(lookup("JWT_SECRET"), runtime_env)?;

        let token_ttl_secs = match lookup("JWT_TTL_SECS") {
            None => DEFAULT_TOKEN_TTL_SECS,
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(ttl) if ttl > 0 && ttl <= MAX_TOKEN_TTL_SECS => ttl,
                _ => {
                    return Err(AppError::config(format!(
                        "JWT_TTL_SECS must be in 1..={MAX_TOKEN_TTL_SECS}, got '{raw}'"
                    )))
                }
            },
        };

        let cors_allowed_origins = Self::cors_origins(lookup("CORS_ALLOWED_ORIGINS"));

        Ok(AppConfig {
            host,
            port,
            runtime_env,
            jwt_secret,
            token_ttl_secs,
            cors_allowed_origins,
        })
    }

    /// Signing settings derived from this configuration.
    pub fn security(&self) -> SecurityConfig {
        SecurityConfig::new(self.jwt_secret.as_bytes()).with_token_ttl_secs(self.token_ttl_secs)
    }

    fn jwt_secret(raw: Option<String>, runtime_env: RuntimeEnv) -> Result<String, AppError> {
        let configured = raw
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        match (configured, runtime_env) {
            (Some(secret), RuntimeEnv::Prod) if secret == DEV_FALLBACK_JWT_SECRET => Err(
                AppError::config("JWT_SECRET must not be the development fallback in production"),
            ),
            (Some(secret), _) => Ok(secret),
            (None, RuntimeEnv::Prod) => {
                Err(AppError::config("JWT_SECRET must be set in production"))
            }
            (None, _) => {
                warn!("JWT_SECRET not set; using the development fallback secret");
                Ok(DEV_FALLBACK_JWT_SECRET.to_string())
            }
        }
    }

    fn cors_origins(raw: Option<String>) -> Vec<String> {
        // Comma-separated origins, e.g.:
        // CORS_ALLOWED_ORIGINS=http://localhost:5173,https://gallery.example.com
        let origins: Vec<String> = raw
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty() && *s != "null")
            .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
            .map(|s| s.to_string())
            .collect();

        if origins.is_empty() {
            DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect()
        } else {
            origins
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig, AppError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_outside_production() {
        let config = load(&[]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.runtime_env, RuntimeEnv::Dev);
        assert_eq!(config.jwt_secret, DEV_FALLBACK_JWT_SECRET);
        assert_eq!(config.token_ttl_secs, DEFAULT_TOKEN_TTL_SECS);
        assert_eq!(config.cors_allowed_origins.len(), 2);
    }

    #[test]
    fn production_requires_a_real_secret() {
        assert!(matches!(
            load(&[("APP_ENV", "production")]),
            Err(AppError::Config { .. })
        ));
        assert!(matches!(
            load(&[("APP_ENV", "prod"), ("JWT_SECRET", "   ")]),
            Err(AppError::Config { .. })
        ));
        assert!(matches!(
            load(&[("APP_ENV", "prod"), ("JWT_SECRET", DEV_FALLBACK_JWT_SECRET)]),
            Err(AppError::Config { .. })
        ));

        let config = load(&[("APP_ENV", "PRODUCTION"), ("JWT_SECRET", "s3cr3t")]).unwrap();
        assert_eq!(config.runtime_env, RuntimeEnv::Prod);
        assert_eq!(config.jwt_secret, "s3cr3t");
    }

    #[test]
    fn invalid_port_and_ttl_are_rejected() {
        assert!(load(&[("BACKEND_PORT", "eighty")]).is_err());
        assert!(load(&[("BACKEND_PORT", "70000")]).is_err());
        assert!(load(&[("JWT_TTL_SECS", "0")]).is_err());
        assert!(load(&[("JWT_TTL_SECS", "-5")]).is_err());

        let config = load(&[("BACKEND_PORT", "8080"), ("JWT_TTL_SECS", "3600")]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.security().token_ttl_secs, 3600);
    }

    #[test]
    fn oversized_ttl_is_rejected() {
        assert!(matches!(
            load(&[("JWT_TTL_SECS", "9223372036854775807")]),
            Err(AppError::Config { .. })
        ));

        let over = (MAX_TOKEN_TTL_SECS + 1).to_string();
        assert!(load(&[("JWT_TTL_SECS", over.as_str())]).is_err());

        let max = MAX_TOKEN_TTL_SECS.to_string();
        let config = load(&[("JWT_TTL_SECS", max.as_str())]).unwrap();
        assert_eq!(config.token_ttl_secs, MAX_TOKEN_TTL_SECS);
    }

    #[test]
    fn cors_origins_are_filtered() {
        let config = load(&[(
            "CORS_ALLOWED_ORIGINS",
            "https://gallery.example.com, null, ftp://x, ,http://localhost:8080",
        )])
        .unwrap();

        assert_eq!(
            config.cors_allowed_origins,
            vec![
                "https://gallery.example.com".to_string(),
                "http://localhost:8080".to_string()
            ]
        );
    }
}
