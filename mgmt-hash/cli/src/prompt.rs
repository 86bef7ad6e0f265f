//! Interactive password entry.

use inquire::validator::Validation;
use inquire::error::{CustomUserError, InquireResult};
use inquire::{Password, PasswordDisplayMode};
use mgmt_hash::{PasswordRole, validate};

/// Prompts for a password with masked input and a confirmation entry.
///
/// Too-short entries and confirmation mismatches are reported inline and
/// the prompt repeats until a valid, confirmed password is given or the
/// user cancels.
pub fn prompt_password(role: PasswordRole) -> InquireResult<String> {
    Password::new(&format!("Enter {role}:"))
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_validator(min_length_validator)
        .with_custom_confirmation_message(&format!("Confirm {role}:"))
        .with_custom_confirmation_error_message("Passwords do not match. Please try again.")
        .prompt()
}

fn min_length_validator(input: &str) -> Result<Validation, CustomUserError> {
    Ok(match validate(input) {
        Ok(()) => Validation::Valid,
        Err(e) => Validation::Invalid(e.to_string().into()),
    })
}
