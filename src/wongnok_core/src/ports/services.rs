use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{password::Password, password_digest::PasswordDigest};

#[derive(Debug, Error)]
#[error("Password hashing failed: {0}")]
pub struct PasswordHasherError(pub String);

/// One-way, salted password hashing.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<PasswordDigest, PasswordHasherError>;

    /// Returns `true` only if `candidate` produced `digest`. A malformed
    /// digest is a non-match, not an error.
    async fn verify(&self, digest: &PasswordDigest, candidate: &Password) -> bool;
}
