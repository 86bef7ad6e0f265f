use std::fmt;

use thiserror::Error;

/// Which of the two management node credentials a password belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRole {
    /// The web interface account (hashed with PBKDF2-SHA256).
    Web,
    /// The OS admin account (hashed with SHA-512 crypt).
    Admin,
}

impl fmt::Display for PasswordRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordRole::Web => f.write_str("web interface password"),
            PasswordRole::Admin => f.write_str("OS admin password"),
        }
    }
}

/// A plaintext password was rejected before hashing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The password has fewer characters than the required minimum.
    #[error("password must be at least {min} characters long (got {actual})")]
    TooShort { min: usize, actual: usize },
}

/// The underlying hash primitive could not complete.
#[derive(Debug, Error)]
pub enum HashingError {
    /// The operating system random source failed while generating a salt.
    #[error("failed to read from the system random source: {0}")]
    Entropy(String),

    /// A caller-supplied salt is unusable for the scheme.
    #[error("invalid salt: {0}")]
    InvalidSalt(String),

    /// The SHA-512 crypt routine returned an error.
    #[error("SHA-512 crypt failed: {0}")]
    Crypt(String),
}

/// Errors returned by [`generate`](crate::generate).
#[derive(Debug, Error)]
pub enum GenerateError {
    /// One of the two passwords failed validation; nothing was hashed.
    #[error("invalid {role}: {source}")]
    InvalidPassword {
        role: PasswordRole,
        #[source]
        source: ValidationError,
    },

    /// A hash could not be computed.
    #[error(transparent)]
    Hashing(#[from] HashingError),
}

impl GenerateError {
    /// The role of the rejected password, if this is a validation failure.
    pub fn role(&self) -> Option<PasswordRole> {
        match self {
            GenerateError::InvalidPassword { role, .. } => Some(*role),
            GenerateError::Hashing(_) => None,
        }
    }
}
