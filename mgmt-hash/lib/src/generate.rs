use serde::Serialize;

use crate::django::hash_web;
use crate::error::{GenerateError, PasswordRole};
use crate::shadow::hash_admin;
use crate::validate::validate;

/// The two hashes needed to bootstrap a management node.
///
/// Serializes as `{"web_hash": ..., "admin_hash": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordHashes {
    /// PBKDF2-SHA256 hash of the web interface password.
    pub web_hash: String,
    /// SHA-512 crypt hash of the OS admin password.
    pub admin_hash: String,
}

/// Validates both passwords, then hashes them.
///
/// Both passwords are validated before anything is hashed, so a rejected
/// admin password never costs a PBKDF2 derivation for the web password.
///
/// ## Examples
///
/// ```rust
/// use mgmt_hash::{generate, PasswordRole};
///
/// let hashes = generate("abcd", "wxyz").unwrap();
/// assert!(hashes.web_hash.starts_with("$pbkdf2-sha256$"));
/// assert!(hashes.admin_hash.starts_with("$6$"));
///
/// let err = generate("ab", "validpass").unwrap_err();
/// assert_eq!(err.role(), Some(PasswordRole::Web));
/// ```
///
/// ## Errors
///
/// Returns `GenerateError::InvalidPassword` naming the first rejected
/// password, or `GenerateError::Hashing` if a hash primitive fails.
pub fn generate(web_password: &str, admin_password: &str) -> Result<PasswordHashes, GenerateError> {
    for (role, password) in [
        (PasswordRole::Web, web_password),
        (PasswordRole::Admin, admin_password),
    ] {
        validate(password).map_err(|source| {
            tracing::debug!(%role, "password rejected");
            GenerateError::InvalidPassword { role, source }
        })?;
    }

    let web_hash = hash_web(web_password)?;
    let admin_hash = hash_admin(admin_password)?;
    tracing::info!("generated web and admin password hashes");

    Ok(PasswordHashes {
        web_hash,
        admin_hash,
    })
}
