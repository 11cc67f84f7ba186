use secrecy::{ExposeSecret, Secret};

/// A self-describing one-way password hash (PHC string format).
///
/// Carries its own salt and cost parameters, so it is the only thing that
/// needs to be stored to verify a password later.
#[derive(Debug, Clone)]
pub struct PasswordDigest(Secret<String>);

impl PasswordDigest {
    pub fn new(digest: Secret<String>) -> Self {
        Self(digest)
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for PasswordDigest {
    fn from(digest: String) -> Self {
        Self(Secret::from(digest))
    }
}
