use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use wongnok_core::{
    CredentialStore, CredentialStoreError, PasswordDigest, SessionOwner, SessionToken, StoredUser,
    UserId, Username,
};

#[derive(Clone)]
struct UserRecord {
    id: UserId,
    password_digest: PasswordDigest,
    is_admin: bool,
}

#[derive(Clone)]
struct TokenRecord {
    user_id: UserId,
    created_at: DateTime<Utc>,
}

#[derive(Default)]
struct State {
    next_id: i64,
    users: HashMap<String, UserRecord>,
    tokens: HashMap<String, TokenRecord>,
}

impl State {
    fn user_by_id(&self, user_id: UserId) -> Option<&UserRecord> {
        self.users.values().find(|u| u.id == user_id)
    }
}

/// In-memory credential store for tests and local development.
#[derive(Default, Clone)]
pub struct HashMapCredentialStore {
    state: Arc<RwLock<State>>,
}

impl HashMapCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn issued_at(&self, token: &SessionToken) -> Option<DateTime<Utc>> {
        let state = self.state.read().await;
        state.tokens.get(token.as_str()).map(|t| t.created_at)
    }

    /// Administrative path: grant or revoke the admin flag.
    pub async fn set_admin(&self, user_id: UserId, is_admin: bool) -> Result<(), CredentialStoreError> {
        let mut state = self.state.write().await;
        let user = state
            .users
            .values_mut()
            .find(|u| u.id == user_id)
            .ok_or(CredentialStoreError::UserNotFound)?;
        user.is_admin = is_admin;
        Ok(())
    }

    /// Administrative path: remove a user, leaving its tokens dangling.
    pub async fn remove_user(&self, user_id: UserId) -> Result<(), CredentialStoreError> {
        let mut state = self.state.write().await;
        let before = state.users.len();
        state.users.retain(|_, u| u.id != user_id);
        if state.users.len() == before {
            return Err(CredentialStoreError::UserNotFound);
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CredentialStore for HashMapCredentialStore {
    async fn insert_user(
        &self,
        username: &Username,
        password_digest: &PasswordDigest,
    ) -> Result<UserId, CredentialStoreError> {
        let mut state = self.state.write().await;
        if state.users.contains_key(username.as_ref()) {
            return Err(CredentialStoreError::UsernameTaken);
        }

        state.next_id += 1;
        let id = UserId::new(state.next_id);
        state.users.insert(
            username.as_ref().to_string(),
            UserRecord {
                id,
                password_digest: password_digest.clone(),
                is_admin: false,
            },
        );
        Ok(id)
    }

    async fn lookup_user_by_username(
        &self,
        username: &Username,
    ) -> Result<StoredUser, CredentialStoreError> {
        let state = self.state.read().await;
        let user = state
            .users
            .get(username.as_ref())
            .ok_or(CredentialStoreError::UserNotFound)?;

        Ok(StoredUser {
            id: user.id,
            password_digest: user.password_digest.clone(),
            is_admin: user.is_admin,
        })
    }

    async fn issue_token(
        &self,
        token: &SessionToken,
        user_id: UserId,
    ) -> Result<(), CredentialStoreError> {
        let mut state = self.state.write().await;
        if state.user_by_id(user_id).is_none() {
            return Err(CredentialStoreError::UnexpectedError(format!(
                "token owner {user_id} does not exist"
            )));
        }
        if state.tokens.contains_key(token.as_str()) {
            return Err(CredentialStoreError::UnexpectedError(
                "token already issued".to_string(),
            ));
        }

        state.tokens.insert(
            token.as_str().to_string(),
            TokenRecord {
                user_id,
                created_at: Utc::now(),
            },
        );
        Ok(())
    }

    async fn delete_token(&self, token: &SessionToken) -> Result<(), CredentialStoreError> {
        self.state.write().await.tokens.remove(token.as_str());
        Ok(())
    }

    async fn resolve_token(
        &self,
        token: &SessionToken,
    ) -> Result<SessionOwner, CredentialStoreError> {
        let state = self.state.read().await;
        let record = state
            .tokens
            .get(token.as_str())
            .ok_or(CredentialStoreError::TokenNotFound)?;
        let user = state
            .user_by_id(record.user_id)
            .ok_or(CredentialStoreError::TokenNotFound)?;

        Ok(SessionOwner {
            user_id: user.id,
            is_admin: user.is_admin,
        })
    }
}
