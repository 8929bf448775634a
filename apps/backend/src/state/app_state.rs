use crate::auth::jwt::TokenCodec;
use crate::config::AppConfig;

use super::security_config::SecurityConfig;

/// Application state shared with handlers through `web::Data`
#[derive(Debug, Clone)]
pub struct AppState {
    /// Signs and verifies session tokens; shared read-only across requests
    pub codec: TokenCodec,
}

impl AppState {
    pub fn new(security: &SecurityConfig) -> Self {
        Self {
            codec: TokenCodec::new(security),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.security())
    }
}
