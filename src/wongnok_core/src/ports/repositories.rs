use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    identity::SessionOwner,
    password_digest::PasswordDigest,
    session_token::SessionToken,
    user::{StoredUser, UserId},
    username::Username,
};

// CredentialStore port trait and errors
#[derive(Debug, Error)]
pub enum CredentialStoreError {
    #[error("Username not available")]
    UsernameTaken,
    #[error("User not found")]
    UserNotFound,
    #[error("Token not found")]
    TokenNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for CredentialStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UsernameTaken, Self::UsernameTaken)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::TokenNotFound, Self::TokenNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Persistence for users and session tokens.
///
/// Implementations must enforce username uniqueness at insertion time and
/// report a conflict as [`CredentialStoreError::UsernameTaken`]; the auth
/// logic never checks for duplicates with a prior read.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn insert_user(
        &self,
        username: &Username,
        password_digest: &PasswordDigest,
    ) -> Result<UserId, CredentialStoreError>;

    async fn lookup_user_by_username(
        &self,
        username: &Username,
    ) -> Result<StoredUser, CredentialStoreError>;

    /// Binds a pre-generated token to a user. A token value that is already
    /// bound is an unexpected error, never an overwrite.
    async fn issue_token(
        &self,
        token: &SessionToken,
        user_id: UserId,
    ) -> Result<(), CredentialStoreError>;

    /// Idempotent: deleting an unknown token succeeds.
    async fn delete_token(&self, token: &SessionToken) -> Result<(), CredentialStoreError>;

    async fn resolve_token(
        &self,
        token: &SessionToken,
    ) -> Result<SessionOwner, CredentialStoreError>;
}
