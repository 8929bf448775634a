//! Session token helpers for tests

use std::time::{SystemTime, UNIX_EPOCH};

use gallery_backend::{Identity, Role, SecurityConfig, TokenCodec};

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";

pub fn test_codec() -> TokenCodec {
    TokenCodec::new(&SecurityConfig::new(TEST_SECRET.as_bytes()))
}

pub fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock after epoch")
        .as_secs() as i64
}

/// Payload issued at `issued_at` and valid for `ttl` seconds.
pub fn payload(subject_id: i64, role: Role, issued_at: i64, ttl: i64) -> Identity {
    Identity {
        subject_id,
        role,
        issued_at,
        expires_at: issued_at + ttl,
    }
}

/// Sign a one-hour token issued now.
pub fn fresh_token(codec: &TokenCodec, subject_id: i64, role: Role) -> (String, Identity) {
    let identity = payload(subject_id, role, now_secs(), 3600);
    let token = codec.sign(&identity).expect("should sign token");
    (token, identity)
}

/// Sign a one-hour token issued two hours ago.
pub fn expired_token(codec: &TokenCodec, subject_id: i64, role: Role) -> String {
    let identity = payload(subject_id, role, now_secs() - 7200, 3600);
    codec.sign(&identity).expect("should sign expired token")
}

/// Full Authorization header value including the "Bearer " prefix
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Replace one character of the signature segment with a different base64url
/// character, wrapping `index` over the segment length.
pub fn tamper_signature(token: &str, index: usize) -> String {
    let sig_start = token.rfind('.').expect("token has three segments") + 1;
    let sig_len = token.len() - sig_start;
    assert!(sig_len > 0, "signature segment is empty");

    let pos = sig_start + index % sig_len;
    let original = token.as_bytes()[pos];
    let replacement = if original == b'A' { 'B' } else { 'A' };

    let mut tampered = String::with_capacity(token.len());
    tampered.push_str(&token[..pos]);
    tampered.push(replacement);
    tampered.push_str(&token[pos + 1..]);
    tampered
}
