use secrecy::Secret;
use wongnok_core::{
    CredentialStore, CredentialStoreError, Password, PasswordHasher, UserId, Username,
};

use crate::error::AuthError;

/// Signup use case - registers a new user
pub struct SignupUseCase<'a, S, H>
where
    S: CredentialStore,
    H: PasswordHasher,
{
    credential_store: &'a S,
    password_hasher: &'a H,
}

impl<'a, S, H> SignupUseCase<'a, S, H>
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

    /// Execute the signup use case
    ///
    /// The username is validated before the password, so a request that is
    /// wrong on both counts reports the username.
    ///
    /// # Returns
    /// The new user's id, or `AuthError::UsernameNotAvailable` when the store
    /// rejects the username as a duplicate
    #[tracing::instrument(name = "SignupUseCase::execute", skip(self, password))]
    pub async fn execute(&self, username: &str, password: Secret<String>) -> Result<UserId, AuthError> {
        let username = Username::parse(username)?;
        let password = Password::parse(password)?;

        let digest = self.password_hasher.hash(&password).await?;

        match self.credential_store.insert_user(&username, &digest).await {
            Ok(user_id) => {
                tracing::info!(%user_id, "user registered");
                Ok(user_id)
            }
            Err(CredentialStoreError::UsernameTaken) => Err(AuthError::UsernameNotAvailable),
            Err(e) => Err(e.into()),
        }
    }
}
