pub mod app;

pub use app::{AppConfig, RuntimeEnv, DEV_FALLBACK_JWT_SECRET};
