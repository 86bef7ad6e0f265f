//! Plaintext password checks applied before any hashing happens.

use crate::error::ValidationError;

/// Minimum number of characters accepted for either password.
pub const MIN_PASSWORD_LEN: usize = 4;

/// Checks that `password` meets the minimum length requirement.
///
/// Length is counted in characters (Unicode scalar values), so a password of
/// four emoji is accepted even though it is sixteen bytes long.
///
/// ## Examples
///
/// ```rust
/// use mgmt_hash::{validate, ValidationError};
///
/// assert!(validate("abcd").is_ok());
/// assert_eq!(
///     validate("abc"),
///     Err(ValidationError::TooShort { min: 4, actual: 3 })
/// );
/// ```
///
/// ## Errors
///
/// Returns `ValidationError::TooShort` when the password is shorter than
/// [`MIN_PASSWORD_LEN`].
pub fn validate(password: &str) -> Result<(), ValidationError> {
    let actual = password.chars().count();
    if actual < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort {
            min: MIN_PASSWORD_LEN,
            actual,
        });
    }
    Ok(())
}
