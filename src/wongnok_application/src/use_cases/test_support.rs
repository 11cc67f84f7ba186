use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;
use wongnok_core::{
    CredentialStore, CredentialStoreError, Password, PasswordDigest, PasswordHasher,
    PasswordHasherError, SessionOwner, SessionToken, StoredUser, UserId, Username,
};

pub fn secret(value: &str) -> Secret<String> {
    Secret::from(value.to_string())
}

// Fake hasher: reversible on purpose, tests only
#[derive(Clone, Default)]
pub struct FakePasswordHasher;

const FAKE_PREFIX: &str = "fake-hash$";

#[async_trait::async_trait]
impl PasswordHasher for FakePasswordHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordDigest, PasswordHasherError> {
        Ok(PasswordDigest::from(format!(
            "{FAKE_PREFIX}{}",
            password.as_ref().expose_secret()
        )))
    }

    async fn verify(&self, digest: &PasswordDigest, candidate: &Password) -> bool {
        digest
            .expose()
            .strip_prefix(FAKE_PREFIX)
            .is_some_and(|plain| plain == candidate.as_ref().expose_secret())
    }
}

#[derive(Clone)]
pub struct MockUser {
    pub id: UserId,
    pub digest: String,
    pub is_admin: bool,
}

/// In-memory store that can be told to fail specific operations.
#[derive(Clone, Default)]
pub struct MockCredentialStore {
    pub users: Arc<RwLock<HashMap<String, MockUser>>>,
    pub tokens: Arc<RwLock<HashMap<String, UserId>>>,
    pub fail_insert: bool,
    pub fail_lookup: bool,
    pub fail_issue: bool,
    pub fail_delete: bool,
    pub fail_resolve: bool,
    pub calls: Arc<AtomicUsize>,
}

impl MockCredentialStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn add_user(&self, username: &str, digest: &str, is_admin: bool) -> UserId {
        let mut users = self.users.write().await;
        let id = UserId::new(users.len() as i64 + 1);
        users.insert(
            username.to_string(),
            MockUser {
                id,
                digest: digest.to_string(),
                is_admin,
            },
        );
        id
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

fn db_error() -> CredentialStoreError {
    CredentialStoreError::UnexpectedError("connection reset".to_string())
}

#[async_trait::async_trait]
impl CredentialStore for MockCredentialStore {
    async fn insert_user(
        &self,
        username: &Username,
        password_digest: &PasswordDigest,
    ) -> Result<UserId, CredentialStoreError> {
        self.touch();
        if self.fail_insert {
            return Err(db_error());
        }
        let mut users = self.users.write().await;
        if users.contains_key(username.as_ref()) {
            return Err(CredentialStoreError::UsernameTaken);
        }
        let id = UserId::new(users.len() as i64 + 1);
        users.insert(
            username.as_ref().to_string(),
            MockUser {
                id,
                digest: password_digest.expose().to_string(),
                is_admin: false,
            },
        );
        Ok(id)
    }

    async fn lookup_user_by_username(
        &self,
        username: &Username,
    ) -> Result<StoredUser, CredentialStoreError> {
        self.touch();
        if self.fail_lookup {
            return Err(db_error());
        }
        let users = self.users.read().await;
        let user = users
            .get(username.as_ref())
            .ok_or(CredentialStoreError::UserNotFound)?;
        Ok(StoredUser {
            id: user.id,
            password_digest: PasswordDigest::from(user.digest.clone()),
            is_admin: user.is_admin,
        })
    }

    async fn issue_token(
        &self,
        token: &SessionToken,
        user_id: UserId,
    ) -> Result<(), CredentialStoreError> {
        self.touch();
        if self.fail_issue {
            return Err(db_error());
        }
        self.tokens
            .write()
            .await
            .insert(token.as_str().to_string(), user_id);
        Ok(())
    }

    async fn delete_token(&self, token: &SessionToken) -> Result<(), CredentialStoreError> {
        self.touch();
        if self.fail_delete {
            return Err(db_error());
        }
        self.tokens.write().await.remove(token.as_str());
        Ok(())
    }

    async fn resolve_token(
        &self,
        token: &SessionToken,
    ) -> Result<SessionOwner, CredentialStoreError> {
        self.touch();
        if self.fail_resolve {
            return Err(db_error());
        }
        let user_id = *self
            .tokens
            .read()
            .await
            .get(token.as_str())
            .ok_or(CredentialStoreError::TokenNotFound)?;
        let users = self.users.read().await;
        let user = users
            .values()
            .find(|u| u.id == user_id)
            .ok_or(CredentialStoreError::TokenNotFound)?;
        Ok(SessionOwner {
            user_id,
            is_admin: user.is_admin,
        })
    }
}
