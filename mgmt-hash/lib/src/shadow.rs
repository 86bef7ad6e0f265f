//! Linux-style SHA-512 crypt hashing for the OS admin password.
//!
//! Produces the `/etc/shadow` layout understood by glibc's `crypt(3)`:
//!
//! ```text
//! $6$rounds=656000$<salt>$<digest>
//! ```
//!
//! The digest itself comes from the `sha-crypt` crate; this module only
//! picks the salt and assembles the final string.

use rand::RngCore;
use rand::rngs::OsRng;
use sha_crypt::{Sha512Params, sha512_crypt_b64};

use crate::error::HashingError;

/// Scheme identifier for SHA-512 crypt.
pub const SHA512_CRYPT_PREFIX: &str = "$6$";

/// Number of SHA-512 crypt rounds used for every admin hash.
pub const SHA512_ROUNDS: usize = 656_000;

/// Salt length in characters (the scheme's maximum).
pub const SHA512_SALT_LEN: usize = 16;

/// Characters allowed in a SHA-512 crypt salt.
pub const SALT_ALPHABET: &[u8; 64] =
    b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Hashes the OS admin password with a fresh random salt.
///
/// ## Examples
///
/// ```rust
/// use mgmt_hash::hash_admin;
///
/// let hash = hash_admin("correct horse").unwrap();
/// assert!(hash.starts_with("$6$rounds=656000$"));
/// ```
///
/// ## Errors
///
/// Returns `HashingError::Entropy` if the operating system random source
/// fails, or `HashingError::Crypt` if the crypt routine does.
pub fn hash_admin(password: &str) -> Result<String, HashingError> {
    let salt = generate_salt()?;
    hash_admin_with_salt(password, &salt)
}

/// Hashes the OS admin password with a caller-provided salt.
///
/// The salt must be 1 to 16 characters from `[./0-9A-Za-z]`. The
/// `rounds=` field is always written, even though it is the only value
/// this crate ever uses.
///
/// ## Errors
///
/// Returns `HashingError::InvalidSalt` for a malformed salt and
/// `HashingError::Crypt` if the crypt routine fails.
pub fn hash_admin_with_salt(password: &str, salt: &str) -> Result<String, HashingError> {
    check_salt(salt)?;

    tracing::debug!(
        rounds = SHA512_ROUNDS,
        salt_len = salt.len(),
        "computing SHA-512 crypt admin hash"
    );

    let params =
        Sha512Params::new(SHA512_ROUNDS).map_err(|e| HashingError::Crypt(format!("{e:?}")))?;
    let digest = sha512_crypt_b64(password.as_bytes(), salt.as_bytes(), &params)
        .map_err(|e| HashingError::Crypt(format!("{e:?}")))?;

    Ok(format!("{SHA512_CRYPT_PREFIX}rounds={SHA512_ROUNDS}${salt}${digest}"))
}

/// Draws a 16-character salt from the crypt alphabet.
///
/// Each random byte is reduced modulo 64, which is unbiased because 256 is a
/// multiple of the alphabet size.
fn generate_salt() -> Result<String, HashingError> {
    let mut bytes = [0u8; SHA512_SALT_LEN];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| HashingError::Entropy(e.to_string()))?;

    Ok(bytes
        .iter()
        .map(|b| SALT_ALPHABET[(b & 0x3f) as usize] as char)
        .collect())
}

fn check_salt(salt: &str) -> Result<(), HashingError> {
    if salt.is_empty() {
        return Err(HashingError::InvalidSalt(
            "SHA-512 crypt salt must not be empty".to_string(),
        ));
    }
    if salt.len() > SHA512_SALT_LEN {
        return Err(HashingError::InvalidSalt(format!(
            "SHA-512 crypt salt is limited to {SHA512_SALT_LEN} characters, got {}",
            salt.len()
        )));
    }
    if let Some(c) = salt
        .chars()
        .find(|c| !c.is_ascii() || !SALT_ALPHABET.contains(&(*c as u8)))
    {
        return Err(HashingError::InvalidSalt(format!(
            "character {c:?} is not allowed in a SHA-512 crypt salt"
        )));
    }
    Ok(())
}
