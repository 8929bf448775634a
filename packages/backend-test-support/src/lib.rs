//! Backend test support utilities
//!
//! Shared by the backend's integration test binaries: logging initialization
//! and assertions on the JSON failure body the auth gates write.

pub mod error_body;
pub mod logging;
