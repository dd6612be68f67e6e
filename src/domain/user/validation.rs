//! Rule-based validation for user payloads.
//!
//! Validation never fails fast: every rule is checked and the messages are
//! collected into a [`UserValidationResult`]. Only fields that are present and
//! non-empty are checked, so an update payload touching a single field is
//! validated on that field alone.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::UserFields;

/// Minimum name length, in characters.
pub const NAME_MIN_LEN: usize = 2;

/// Maximum name length, in characters.
pub const NAME_MAX_LEN: usize = 50;

/// Maximum email length, in characters.
pub const EMAIL_MAX_LEN: usize = 254;

/// Departments a user may belong to.
pub const DEPARTMENTS: [&str; 5] = [
    "Engineering",
    "Product",
    "Design",
    "Operations",
    "Human Resources",
];

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Outcome of validating a whole user payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl UserValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Outcome of validating a single email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailValidationResult {
    pub email: String,
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl EmailValidationResult {
    fn valid(email: &str) -> Self {
        Self {
            email: email.to_string(),
            is_valid: true,
            reason: None,
        }
    }

    fn invalid(email: &str, reason: &str) -> Self {
        Self {
            email: email.to_string(),
            is_valid: false,
            reason: Some(reason.to_string()),
        }
    }
}

/// Validates every present field of a create or update payload.
pub fn validate_user(fields: &impl UserFields) -> UserValidationResult {
    let mut errors = Vec::new();

    if let Some(name) = fields.name().filter(|n| !n.is_empty()) {
        errors.extend(validate_name(name));
    }

    if let Some(email) = fields.email().filter(|e| !e.is_empty()) {
        let result = validate_email(email);
        if !result.is_valid {
            errors.push(
                result
                    .reason
                    .unwrap_or_else(|| "Email format is invalid".to_string()),
            );
        }
    }

    if let Some(department) = fields.department().filter(|d| !d.is_empty()) {
        errors.extend(validate_department(department));
    }

    UserValidationResult::from_errors(errors)
}

/// Checks the name length bounds, returning one message per violated bound.
pub fn validate_name(name: &str) -> Vec<String> {
    let len = name.chars().count();
    let mut errors = Vec::new();
    if len < NAME_MIN_LEN {
        errors.push(format!("Name must be at least {} characters", NAME_MIN_LEN));
    }
    if len > NAME_MAX_LEN {
        errors.push(format!("Name cannot exceed {} characters", NAME_MAX_LEN));
    }
    errors
}

/// Checks the department against [`DEPARTMENTS`].
pub fn validate_department(department: &str) -> Option<String> {
    if DEPARTMENTS.contains(&department) {
        None
    } else {
        Some(format!(
            "Department must be one of: {}",
            DEPARTMENTS.join(", ")
        ))
    }
}

/// Validates a single email address.
///
/// Checks run in order: presence, format, then length.
pub fn validate_email(email: &str) -> EmailValidationResult {
    if email.is_empty() {
        return EmailValidationResult::invalid(email, "Email cannot be empty");
    }

    if !EMAIL_PATTERN.is_match(email) {
        return EmailValidationResult::invalid(email, "Email format is invalid");
    }

    if email.chars().count() > EMAIL_MAX_LEN {
        return EmailValidationResult::invalid(
            email,
            &format!("Email cannot exceed {} characters", EMAIL_MAX_LEN),
        );
    }

    EmailValidationResult::valid(email)
}

/// Validates a batch of email addresses, preserving order.
pub fn validate_emails<S: AsRef<str>>(emails: &[S]) -> Vec<EmailValidationResult> {
    emails.iter().map(|e| validate_email(e.as_ref())).collect()
}
