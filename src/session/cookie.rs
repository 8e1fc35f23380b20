//! Signed cookie helpers for session authentication.
//!
//! Uses HMAC-SHA256 to sign session tokens, making cookies tamper-proof.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signs a session token with HMAC-SHA256.
///
/// Returns a string in the format `{token}.{signature}`.
pub fn sign_session_token(token: &str, secret: &str) -> String {
    let signature = compute_hmac(token.as_bytes(), secret.as_bytes());
    format!("{}.{}", token, hex::encode(signature))
}

/// Verifies a signed cookie value and extracts the session token.
///
/// Returns `None` if the signature is invalid (tampered).
pub fn verify_signed_cookie(cookie_value: &str, secret: &str) -> Option<String> {
    let (token, signature_hex) = cookie_value.rsplit_once('.')?;

    let actual_sig = hex::decode(signature_hex).ok()?;
    let expected_sig = compute_hmac(token.as_bytes(), secret.as_bytes());

    if constant_time_eq(&expected_sig, &actual_sig) {
        Some(token.to_owned())
    } else {
        log::warn!(
            target: "cookmark::session",
            "msg=\"session cookie tampered\" cookie_prefix=\"{}...\"",
            &cookie_value.chars().take(8).collect::<String>()
        );
        None
    }
}

/// Computes HMAC-SHA256.
///
/// # Panics
///
/// Cannot panic: HMAC-SHA256 accepts keys of any length.
fn compute_hmac(message: &[u8], key: &[u8]) -> Vec<u8> {
    #[allow(clippy::expect_used)]
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any size");
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}

/// Constant-time comparison to prevent timing attacks.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-that-is-long-enough";

    #[test]
    fn test_sign_and_verify() {
        let signed = sign_session_token("abc123session", SECRET);
        assert_eq!(
            verify_signed_cookie(&signed, SECRET),
            Some("abc123session".to_owned())
        );
    }

    #[test]
    fn test_tampered_signature() {
        let tampered = format!("abc123session.{}", "0".repeat(64));
        assert!(verify_signed_cookie(&tampered, SECRET).is_none());
    }

    #[test]
    fn test_tampered_token() {
        let signed = sign_session_token("abc123session", SECRET);
        let signature = signed.rsplit_once('.').unwrap().1;
        let tampered = format!("different_session.{signature}");

        assert!(verify_signed_cookie(&tampered, SECRET).is_none());
    }

    #[test]
    fn test_wrong_secret() {
        let signed = sign_session_token("abc123session", SECRET);
        assert!(verify_signed_cookie(&signed, "some-other-secret-also-long-enough").is_none());
    }

    #[test]
    fn test_malformed_cookie() {
        assert!(verify_signed_cookie("noseparator", SECRET).is_none());
        assert!(verify_signed_cookie("session.notahexsignature", SECRET).is_none());
    }

    #[test]
    fn test_deterministic_signing() {
        assert_eq!(
            sign_session_token("abc123session", SECRET),
            sign_session_token("abc123session", SECRET)
        );
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"hello", b"hello"));
        assert!(!constant_time_eq(b"hello", b"world"));
        assert!(!constant_time_eq(b"hello", b"hello!"));
        assert!(constant_time_eq(b"", b""));
    }
}
