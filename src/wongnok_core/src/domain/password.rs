use secrecy::{ExposeSecret, Secret};

use super::validation::{self, ValidationError};

pub const PASSWORD_MIN_LENGTH: usize = 6;
pub const PASSWORD_MAX_LENGTH: usize = 64;

const FIELD: &str = "password";

/// A plaintext password as presented by the client. Never stored.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    /// Parses a password for registration: required, then minimum and maximum length.
    pub fn parse(raw: Secret<String>) -> Result<Self, ValidationError> {
        let value = raw.expose_secret();
        validation::required(FIELD, value)?;
        validation::min_length(FIELD, value, PASSWORD_MIN_LENGTH)?;
        validation::max_length(FIELD, value, PASSWORD_MAX_LENGTH)?;
        Ok(Self(raw))
    }

    /// Parses a password presented at sign-in; the minimum length is not enforced.
    pub fn parse_for_sign_in(raw: Secret<String>) -> Result<Self, ValidationError> {
        let value = raw.expose_secret();
        validation::required(FIELD, value)?;
        validation::max_length(FIELD, value, PASSWORD_MAX_LENGTH)?;
        Ok(Self(raw))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
