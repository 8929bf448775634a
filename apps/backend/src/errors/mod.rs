//! Error codes shared by the HTTP error model.

pub mod error_code;

pub use error_code::ErrorCode;
