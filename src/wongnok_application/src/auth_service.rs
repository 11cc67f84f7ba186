//! The entry point the HTTP boundary talks to.

use secrecy::Secret;
use wongnok_core::{CredentialStore, Identity, PasswordHasher, SessionToken, UserId};

use crate::{
    error::AuthError,
    use_cases::{SigninUseCase, SignoutUseCase, SignupUseCase, VerifyTokenUseCase},
};

/// Credential and session-token service.
///
/// Holds no state of its own besides the injected store and hasher, so it can
/// be cloned into every request handler and called concurrently.
#[derive(Clone)]
pub struct AuthService<S, H> {
    credential_store: S,
    password_hasher: H,
}

impl<S, H> AuthService<S, H>
where
    S: CredentialStore,
    H: PasswordHasher,
{
    pub fn new(credential_store: S, password_hasher: H) -> Self {
        Self {
            credential_store,
            password_hasher,
        }
    }

    pub async fn sign_up(
        &self,
        username: &str,
        password: Secret<String>,
    ) -> Result<UserId, AuthError> {
        SignupUseCase::new(&self.credential_store, &self.password_hasher)
            .execute(username, password)
            .await
    }

    pub async fn sign_in(
        &self,
        username: &str,
        password: Secret<String>,
    ) -> Result<SessionToken, AuthError> {
        SigninUseCase::new(&self.credential_store, &self.password_hasher)
            .execute(username, password)
            .await
    }

    pub async fn sign_out(&self, token: &str) -> Result<(), AuthError> {
        SignoutUseCase::new(&self.credential_store)
            .execute(token)
            .await
    }

    pub async fn verify_token(&self, token: &str) -> Result<Identity, AuthError> {
        VerifyTokenUseCase::new(&self.credential_store)
            .execute(token)
            .await
    }

    pub fn credential_store(&self) -> &S {
        &self.credential_store
    }
}
