use std::borrow::Cow;

use thiserror::Error;

/// Top-level error type returned by flatsocial operations.
#[derive(Debug, Error)]
pub enum RepoError {
    /// Validation failed for one or more fields.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A referenced user, post or record does not exist.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, code: &'static str },

    /// The status gate refused the actor.
    #[error("access denied: {code}")]
    Access { code: &'static str },

    /// Failure outside the data itself (hashing, encoding).
    #[error("{message}")]
    Other { message: Cow<'static, str> },

    /// A collection could not be read or written.
    #[error("storage error on {collection}: {message}")]
    Storage {
        collection: String,
        message: Cow<'static, str>,
    },
}

impl RepoError {
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound {
            entity,
            code: "not_found",
        }
    }

    pub fn user_not_found() -> Self {
        Self::NotFound {
            entity: "user",
            code: "user_not_found",
        }
    }

    pub fn access(code: &'static str) -> Self {
        Self::Access { code }
    }

    pub fn storage(collection: impl Into<String>, message: impl Into<Cow<'static, str>>) -> Self {
        Self::Storage {
            collection: collection.into(),
            message: message.into(),
        }
    }

    pub fn other(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Write failure reported by a store that returned `false` from `save`.
    pub fn write_failed(collection: &str) -> Self {
        Self::storage(collection, "write failed")
    }

    /// Stable string code surfaced to callers (`empty_content`, `not_found`, ...).
    pub fn code(&self) -> &str {
        match self {
            Self::Validation(err) => err.code(),
            Self::NotFound { code, .. } | Self::Access { code } => code,
            Self::Other { .. } => "internal_error",
            Self::Storage { .. } => "storage_error",
        }
    }
}

/// Collection of validation issues encountered while preparing a mutation.
#[derive(Debug, Error)]
#[error("validation errors: {issues:?}")]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new<I>(issues: I) -> Self
    where
        I: IntoIterator<Item = ValidationIssue>,
    {
        Self {
            issues: issues.into_iter().collect(),
        }
    }

    /// Convenience helper for constructing a single-field validation error.
    pub fn single(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new([ValidationIssue::new(field, code, message)])
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Code of the first issue, or `validation` when there are none.
    pub fn code(&self) -> &str {
        self.issues.first().map(|issue| issue.code.as_str()).unwrap_or("validation")
    }
}

/// Detailed validation failure for a single field or logical path.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;
