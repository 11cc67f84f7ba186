use std::future::Future;
use std::time::Duration;

use wongnok_core::{
    CredentialStore, CredentialStoreError, PasswordDigest, SessionOwner, SessionToken, StoredUser,
    UserId, Username,
};

/// Bounds every call on the inner store by a deadline.
///
/// When the deadline passes the inner future is dropped, which cancels the
/// pending query, and the call fails as an unexpected error.
#[derive(Clone)]
pub struct TimeoutCredentialStore<S> {
    inner: S,
    timeout: Duration,
}

impl<S> TimeoutCredentialStore<S> {
    pub fn new(inner: S, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    async fn bounded<T, F>(&self, operation: &'static str, fut: F) -> Result<T, CredentialStoreError>
    where
        F: Future<Output = Result<T, CredentialStoreError>>,
    {
        tokio::time::timeout(self.timeout, fut).await.map_err(|_| {
            tracing::warn!(operation, timeout = ?self.timeout, "credential store deadline exceeded");
            CredentialStoreError::UnexpectedError(format!(
                "{operation} timed out after {:?}",
                self.timeout
            ))
        })?
    }
}

#[async_trait::async_trait]
impl<S: CredentialStore> CredentialStore for TimeoutCredentialStore<S> {
    async fn insert_user(
        &self,
        username: &Username,
        password_digest: &PasswordDigest,
    ) -> Result<UserId, CredentialStoreError> {
        self.bounded("insert_user", self.inner.insert_user(username, password_digest))
            .await
    }

    async fn lookup_user_by_username(
        &self,
        username: &Username,
    ) -> Result<StoredUser, CredentialStoreError> {
        self.bounded(
            "lookup_user_by_username",
            self.inner.lookup_user_by_username(username),
        )
        .await
    }

    async fn issue_token(
        &self,
        token: &SessionToken,
        user_id: UserId,
    ) -> Result<(), CredentialStoreError> {
        self.bounded("issue_token", self.inner.issue_token(token, user_id))
            .await
    }

    async fn delete_token(&self, token: &SessionToken) -> Result<(), CredentialStoreError> {
        self.bounded("delete_token", self.inner.delete_token(token))
            .await
    }

    async fn resolve_token(
        &self,
        token: &SessionToken,
    ) -> Result<SessionOwner, CredentialStoreError> {
        self.bounded("resolve_token", self.inner.resolve_token(token))
            .await
    }
}
