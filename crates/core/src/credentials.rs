//! Validation rules for signup and login input.
//!
//! Length rules apply at signup only. Login merely requires both fields to
//! be present and non-empty; anything further would leak which rule a stored
//! credential was created under.

use crate::error::CoreError;

/// Minimum username length accepted at signup.
pub const MIN_USERNAME_LEN: usize = 3;

/// Minimum password length accepted at signup.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validate a signup username (>= 3 characters).
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    if username.len() < MIN_USERNAME_LEN {
        return Err(CoreError::Validation(format!(
            "Username must be at least {MIN_USERNAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a signup password (>= 6 characters).
pub fn validate_password(password: &str) -> Result<(), CoreError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate that login input carries both fields, non-empty.
pub fn validate_login_fields(username: &str, password: &str) -> Result<(), CoreError> {
    if username.is_empty() || password.is_empty() {
        return Err(CoreError::Validation(
            "Username and password are required".into(),
        ));
    }
    Ok(())
}
