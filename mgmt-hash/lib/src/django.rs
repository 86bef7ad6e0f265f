//! Django-style PBKDF2-SHA256 hashing for the web interface password.
//!
//! The management node's web interface stores credentials in the modular
//! crypt layout used by passlib's `pbkdf2_sha256` handler:
//!
//! ```text
//! $pbkdf2-sha256$36000$<salt>$<digest>
//! ```
//!
//! Salt and digest are written in "adapted base64": the standard alphabet
//! with `+` swapped for `.`, and no `=` padding. A 16-byte salt therefore
//! renders as 22 characters and the 32-byte digest as 43.
//!
//! ## Examples
//!
//! ```rust
//! use mgmt_hash::hash_web;
//!
//! let hash = hash_web("correct horse").unwrap();
//! assert!(hash.starts_with("$pbkdf2-sha256$36000$"));
//! ```

use base64::{Engine as _, engine::general_purpose::STANDARD_NO_PAD};
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::Sha256;

use crate::error::HashingError;

/// Algorithm identifier written between the first two `$` delimiters.
pub const PBKDF2_IDENT: &str = "pbkdf2-sha256";

/// PBKDF2 iteration count used for every web hash.
pub const PBKDF2_ROUNDS: u32 = 36_000;

/// Number of random salt bytes generated per hash.
pub const PBKDF2_SALT_LEN: usize = 16;

/// Length of the derived key in bytes (one SHA-256 block).
pub const PBKDF2_DIGEST_LEN: usize = 32;

/// Hashes the web interface password with a fresh random salt.
///
/// ## Errors
///
/// Returns `HashingError::Entropy` if the operating system random source
/// cannot provide salt bytes.
pub fn hash_web(password: &str) -> Result<String, HashingError> {
    let mut salt = [0u8; PBKDF2_SALT_LEN];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| HashingError::Entropy(e.to_string()))?;

    hash_web_with_salt(password, &salt)
}

/// Hashes the web interface password with a caller-provided salt.
///
/// ## Warning
///
/// Only use this where a deterministic result is required (tests, known
/// answer checks). Real credentials should always come from [`hash_web`].
///
/// ## Examples
///
/// ```rust
/// use mgmt_hash::hash_web_with_salt;
///
/// let a = hash_web_with_salt("password", b"0123456789abcdef").unwrap();
/// let b = hash_web_with_salt("password", b"0123456789abcdef").unwrap();
/// assert_eq!(a, b);
/// ```
///
/// ## Errors
///
/// Returns `HashingError::InvalidSalt` if `salt` is empty.
pub fn hash_web_with_salt(password: &str, salt: &[u8]) -> Result<String, HashingError> {
    if salt.is_empty() {
        return Err(HashingError::InvalidSalt(
            "PBKDF2 salt must not be empty".to_string(),
        ));
    }

    tracing::debug!(
        rounds = PBKDF2_ROUNDS,
        salt_len = salt.len(),
        "deriving PBKDF2-SHA256 web hash"
    );

    let digest = derive(password.as_bytes(), salt, PBKDF2_ROUNDS);

    Ok(format!(
        "${PBKDF2_IDENT}${PBKDF2_ROUNDS}${}${}",
        ab64_encode(salt),
        ab64_encode(&digest)
    ))
}

fn derive(password: &[u8], salt: &[u8], rounds: u32) -> [u8; PBKDF2_DIGEST_LEN] {
    let mut digest = [0u8; PBKDF2_DIGEST_LEN];
    pbkdf2_hmac::<Sha256>(password, salt, rounds, &mut digest);
    digest
}

/// Standard base64 without padding, `+` replaced by `.`.
fn ab64_encode(bytes: &[u8]) -> String {
    STANDARD_NO_PAD.encode(bytes).replace('+', ".")
}
