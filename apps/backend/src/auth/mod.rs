pub mod claims;
pub mod credential;
pub mod jwt;

pub use claims::{Claims, Identity, Role};
pub use credential::{bearer_token, extract_and_verify, Credential};
pub use jwt::{TokenCodec, TokenError};
