use rand::{Rng, distr::Alphanumeric};
use secrecy::{ExposeSecret, Secret};

/// 64 alphanumeric characters, roughly 380 bits of entropy.
const TOKEN_LENGTH: usize = 64;

/// An opaque bearer token. Possessing it is enough to act as its owner.
#[derive(Debug, Clone)]
pub struct SessionToken(Secret<String>);

impl SessionToken {
    /// Generates a fresh token from the thread-local CSPRNG.
    pub fn generate() -> Self {
        let value: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect();
        Self(Secret::from(value))
    }

    pub fn as_str(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for SessionToken {
    fn from(value: String) -> Self {
        Self(Secret::from(value))
    }
}

impl From<&str> for SessionToken {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl PartialEq for SessionToken {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for SessionToken {}
