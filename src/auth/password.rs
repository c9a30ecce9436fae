//! Password hashing with PBKDF2-HMAC-SHA256.
//!
//! Encodings are stored as `<salt-hex>:<hash-hex>`. A fresh random salt is
//! drawn on every hash, so two hashes of the same password never compare
//! equal.

use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;

const SALT_LEN: usize = 16;
const KEY_LEN: usize = 32;
const ITERATIONS: u32 = 100_000;

/// Hash a password into the `salt:hash` hex encoding.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);

    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, ITERATIONS, &mut key);

    format!("{}:{}", hex::encode(salt), hex::encode(key))
}

/// Verify a password against a stored encoding.
///
/// Malformed encodings (missing separator, non-hex, wrong hash length)
/// verify as `false` rather than erroring. The final comparison runs over
/// every byte regardless of where the first mismatch occurs.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_hex, hash_hex)) = stored.split_once(':') else {
        return false;
    };
    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };
    let Ok(expected) = hex::decode(hash_hex) else {
        return false;
    };
    if salt.is_empty() || expected.len() != KEY_LEN {
        return false;
    }

    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, ITERATIONS, &mut key);

    key.iter()
        .zip(expected.iter())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_roundtrip() {
        let encoded = hash_password("correct horse battery staple");
        assert!(verify_password("correct horse battery staple", &encoded));
    }

    #[test]
    fn test_wrong_password_fails() {
        let encoded = hash_password("correct horse battery staple");
        assert!(!verify_password("incorrect horse battery staple", &encoded));
        assert!(!verify_password("", &encoded));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        // Salt randomness: equal passwords must not produce equal encodings.
        let a = hash_password("secret");
        let b = hash_password("secret");
        assert_ne!(a, b);
        assert!(verify_password("secret", &a));
        assert!(verify_password("secret", &b));
    }

    #[test]
    fn test_encoding_shape() {
        let encoded = hash_password("secret");
        let (salt_hex, hash_hex) = encoded.split_once(':').unwrap();
        assert_eq!(salt_hex.len(), SALT_LEN * 2);
        assert_eq!(hash_hex.len(), KEY_LEN * 2);
        assert!(salt_hex.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(hash_hex.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_malformed_encodings_fail_closed() {
        assert!(!verify_password("secret", ""));
        assert!(!verify_password("secret", "no-separator"));
        assert!(!verify_password("secret", "nothex:nothex"));
        assert!(!verify_password("secret", ":"));
        // Valid hex, but truncated hash.
        assert!(!verify_password("secret", "abcdef:abcdef"));
    }
}
