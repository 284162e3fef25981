use email_address::EmailAddress;

use crate::errors::{ValidationError, ValidationResult};

/// Returns `true` if the provided string is a syntactically valid email address.
pub fn is_valid_email(value: &str) -> bool {
    EmailAddress::is_valid(value)
}

/// Trimmed content, or a single-issue validation error carrying `code` when it is blank.
pub fn require_content(field: &str, code: &str, content: &str) -> ValidationResult<String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::single(field, code, format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

/// Parses a user id supplied as text (path segment, query string, CLI argument).
pub fn parse_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}
