// ============================
// crates/backend-lib/src/validation/mod.rs
// ============================
//! Request validation module.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::error::AppError;
use taskboard_common::{LoginRequest, RegisterRequest};

// Common validation constants
const MIN_PASSWORD_LENGTH: usize = 6;
const MAX_PASSWORD_LENGTH: usize = 128;
const MAX_USERNAME_LENGTH: usize = 50;
const MAX_TITLE_LENGTH: usize = 200;
const MAX_EMAIL_LENGTH: usize = 254; // RFC 5321 SMTP limit

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

/// Possible validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Invalid password: {0}")]
    InvalidPassword(String),

    #[error("Invalid title: {0}")]
    InvalidTitle(String),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate a username
pub fn validate_username(username: &str) -> ValidationResult<&str> {
    if username.trim().is_empty() {
        return Err(ValidationError::InvalidUsername(
            "Username must not be empty".to_string(),
        ));
    }

    if username.len() > MAX_USERNAME_LENGTH {
        return Err(ValidationError::InvalidUsername(format!(
            "Username cannot exceed {MAX_USERNAME_LENGTH} characters"
        )));
    }

    Ok(username)
}

/// Validate an email address against the format regex and length cap.
pub fn validate_email(email: &str) -> ValidationResult<&str> {
    if email.is_empty() {
        return Err(ValidationError::InvalidEmail(
            "Email address must not be empty".to_string(),
        ));
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::InvalidEmail(format!(
            "Email address cannot exceed {MAX_EMAIL_LENGTH} characters"
        )));
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::InvalidEmail(
            "Invalid email address format".to_string(),
        ));
    }

    Ok(email)
}

/// Validate a password's length. No complexity classes are required;
/// strength comes from the minimum length and the salted hash.
pub fn validate_password(password: &str) -> ValidationResult<&str> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::InvalidPassword(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(ValidationError::InvalidPassword(format!(
            "Password cannot exceed {MAX_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(password)
}

/// Validate a task title
pub fn validate_title(title: &str) -> ValidationResult<&str> {
    if title.trim().is_empty() {
        return Err(ValidationError::InvalidTitle(
            "Title must not be empty".to_string(),
        ));
    }

    if title.len() > MAX_TITLE_LENGTH {
        return Err(ValidationError::InvalidTitle(format!(
            "Title cannot exceed {MAX_TITLE_LENGTH} characters"
        )));
    }

    Ok(title)
}

/// Validate a registration request, returning the three required fields.
pub fn validate_register(req: &RegisterRequest) -> ValidationResult<(String, String, String)> {
    let username = req
        .username
        .as_deref()
        .ok_or(ValidationError::MissingField("username"))?;
    let email = req
        .email
        .as_deref()
        .ok_or(ValidationError::MissingField("email"))?;
    let password = req
        .password
        .as_deref()
        .ok_or(ValidationError::MissingField("password"))?;

    validate_username(username)?;
    validate_email(email)?;
    validate_password(password)?;

    Ok((username.to_string(), email.to_string(), password.to_string()))
}

/// Validate a login request, returning email and password.
pub fn validate_login(req: &LoginRequest) -> ValidationResult<(String, String)> {
    let email = req
        .email
        .as_deref()
        .ok_or(ValidationError::MissingField("email"))?;
    let password = req
        .password
        .as_deref()
        .ok_or(ValidationError::MissingField("password"))?;

    if email.is_empty() {
        return Err(ValidationError::MissingField("email"));
    }
    if password.is_empty() {
        return Err(ValidationError::MissingField("password"));
    }

    Ok((email.to_string(), password.to_string()))
}
