//! Field-level validation rules.
//!
//! Every rule returns a [`ValidationError`] naming the field and the kind of
//! failure, so callers can tell a client mistake apart from an infrastructure
//! failure by type instead of by message text.

use std::fmt;

use regex::Regex;
use thiserror::Error;

/// What went wrong with a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    Required,
    TooShort,
    TooLong,
    Invalid,
    InvalidUrl,
    TooFewItems,
    TooManyItems,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::Required => "required",
            Self::TooShort => "too short",
            Self::TooLong => "too long",
            Self::Invalid => "invalid",
            Self::InvalidUrl => "invalid url",
            Self::TooFewItems => "too few items",
            Self::TooManyItems => "too many items",
        };
        f.write_str(message)
    }
}

/// A caller-correctable failure attributable to one field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {kind}")]
pub struct ValidationError {
    field: &'static str,
    kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(field: &'static str, kind: ValidationErrorKind) -> Self {
        Self { field, kind }
    }

    pub fn required(field: &'static str) -> Self {
        Self::new(field, ValidationErrorKind::Required)
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }
}

pub fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

/// Lengths are counted in characters, not bytes.
pub fn min_length(field: &'static str, value: &str, min: usize) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        return Err(ValidationError::new(field, ValidationErrorKind::TooShort));
    }
    Ok(())
}

pub fn max_length(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::new(field, ValidationErrorKind::TooLong));
    }
    Ok(())
}

pub fn matches(field: &'static str, value: &str, pattern: &Regex) -> Result<(), ValidationError> {
    if !pattern.is_match(value) {
        return Err(ValidationError::new(field, ValidationErrorKind::Invalid));
    }
    Ok(())
}

/// Accepts absolute URLs that carry a host (`https://example.com/x`), rejects
/// relative paths and host-less schemes such as `mailto:`.
pub fn url(field: &'static str, value: &str) -> Result<(), ValidationError> {
    match url::Url::parse(value) {
        Ok(parsed) if parsed.has_host() => Ok(()),
        _ => Err(ValidationError::new(field, ValidationErrorKind::InvalidUrl)),
    }
}

pub fn collection_size(
    field: &'static str,
    len: usize,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    if len < min {
        return Err(ValidationError::new(field, ValidationErrorKind::TooFewItems));
    }
    if len > max {
        return Err(ValidationError::new(field, ValidationErrorKind::TooManyItems));
    }
    Ok(())
}
