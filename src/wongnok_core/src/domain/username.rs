use std::sync::LazyLock;

use regex::Regex;

use super::validation::{self, ValidationError};

pub const USERNAME_MIN_LENGTH: usize = 4;
pub const USERNAME_MAX_LENGTH: usize = 20;

static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]*$").expect("username pattern is a valid regex"));

const FIELD: &str = "username";

/// A normalized (lowercased, trimmed) username.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Parses a username for registration.
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// required, minimum length, maximum length, character class.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let username = normalize(raw);

        validation::required(FIELD, &username)?;
        validation::min_length(FIELD, &username, USERNAME_MIN_LENGTH)?;
        validation::max_length(FIELD, &username, USERNAME_MAX_LENGTH)?;
        validation::matches(FIELD, &username, &USERNAME_PATTERN)?;

        Ok(Self(username))
    }

    /// Parses a username presented at sign-in. Only presence and the upper
    /// bound are checked; anything else is left to the lookup.
    pub fn parse_for_sign_in(raw: &str) -> Result<Self, ValidationError> {
        let username = normalize(raw);

        validation::required(FIELD, &username)?;
        validation::max_length(FIELD, &username, USERNAME_MAX_LENGTH)?;

        Ok(Self(username))
    }
}

fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
