//! Password hashes for bootstrapping a Pexip management node.
//!
//! A management node needs two credentials baked into its configuration,
//! each stored in a different format:
//!
//! | Account | Scheme | Cost | Layout |
//! |---------|--------|------|--------|
//! | Web interface | PBKDF2-SHA256 (Django-style) | 36 000 iterations | `$pbkdf2-sha256$36000$<salt>$<digest>` |
//! | OS admin | SHA-512 crypt (Linux shadow) | 656 000 rounds | `$6$rounds=656000$<salt>$<digest>` |
//!
//! Cost parameters are fixed. Salts are drawn from the operating system
//! random source on every call, so hashing the same password twice never
//! yields the same string.
//!
//! ## Examples
//!
//! ```rust
//! use mgmt_hash::generate;
//!
//! let hashes = generate("web-secret", "admin-secret").unwrap();
//! println!("{}", hashes.web_hash);
//! println!("{}", hashes.admin_hash);
//! ```

pub mod django;
pub mod error;
pub mod generate;
pub mod shadow;
pub mod validate;

pub use django::{
    PBKDF2_DIGEST_LEN, PBKDF2_IDENT, PBKDF2_ROUNDS, PBKDF2_SALT_LEN, hash_web, hash_web_with_salt,
};
pub use error::{GenerateError, HashingError, PasswordRole, ValidationError};
pub use generate::{PasswordHashes, generate};
pub use shadow::{
    SALT_ALPHABET, SHA512_CRYPT_PREFIX, SHA512_ROUNDS, SHA512_SALT_LEN, hash_admin,
    hash_admin_with_salt,
};
pub use validate::{MIN_PASSWORD_LEN, validate};
