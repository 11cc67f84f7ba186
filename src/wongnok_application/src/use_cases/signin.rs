use secrecy::Secret;
use wongnok_core::{
    CredentialStore, CredentialStoreError, Password, PasswordHasher, SessionToken, Username,
};

use crate::error::AuthError;

/// Signin use case - checks credentials and issues a session token
pub struct SigninUseCase<'a, S, H>
where
    S: CredentialStore,
    H: PasswordHasher,
{
    credential_store: &'a S,
    password_hasher: &'a H,
}

impl<'a, S, H> SigninUseCase<'a, S, H>
where
    S: CredentialStore,
    H: PasswordHasher,
{
    pub fn new(credential_store: &'a S, password_hasher: &'a H) -> Self {
        Self {
            credential_store,
            password_hasher,
        }
    }

    /// Execute the signin use case
    ///
    /// An unknown username and a wrong password both yield
    /// `AuthError::InvalidCredentials`. Existing sessions of the user are left
    /// alone. If the token cannot be persisted no token is returned.
    #[tracing::instrument(name = "SigninUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: &str,
        password: Secret<String>,
    ) -> Result<SessionToken, AuthError> {
        let username = Username::parse_for_sign_in(username)?;
        let password = Password::parse_for_sign_in(password)?;

        let user = match self
            .credential_store
            .lookup_user_by_username(&username)
            .await
        {
            Ok(user) => user,
            Err(CredentialStoreError::UserNotFound) => return Err(AuthError::InvalidCredentials),
            Err(e) => return Err(e.into()),
        };

        if !self
            .password_hasher
            .verify(&user.password_digest, &password)
            .await
        {
            return Err(AuthError::InvalidCredentials);
        }

        let token = SessionToken::generate();
        self.credential_store.issue_token(&token, user.id).await?;

        tracing::info!(user_id = %user.id, "session issued");
        Ok(token)
    }
}
