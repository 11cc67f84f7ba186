use wongnok_core::{CredentialStore, SessionToken, ValidationError};

use crate::error::AuthError;

/// Signout use case - revokes a session token
pub struct SignoutUseCase<'a, S>
where
    S: CredentialStore,
{
    credential_store: &'a S,
}

impl<'a, S> SignoutUseCase<'a, S>
where
    S: CredentialStore,
{
    pub fn new(credential_store: &'a S) -> Self {
        Self { credential_store }
    }

    /// Execute the signout use case
    ///
    /// An empty token is rejected as a validation failure. Revoking a token
    /// that is not live succeeds.
    #[tracing::instrument(name = "SignoutUseCase::execute", skip_all)]
    pub async fn execute(&self, token: &str) -> Result<(), AuthError> {
        if token.is_empty() {
            return Err(ValidationError::required("token").into());
        }

        self.credential_store
            .delete_token(&SessionToken::from(token))
            .await?;

        Ok(())
    }
}
