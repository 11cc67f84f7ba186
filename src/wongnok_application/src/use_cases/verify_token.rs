use wongnok_core::{CredentialStore, CredentialStoreError, Identity, SessionToken};

use crate::error::AuthError;

/// Verify token use case - resolves a presented token to an identity
pub struct VerifyTokenUseCase<'a, S>
where
    S: CredentialStore,
{
    credential_store: &'a S,
}

impl<'a, S> VerifyTokenUseCase<'a, S>
where
    S: CredentialStore,
{
    pub fn new(credential_store: &'a S) -> Self {
        Self { credential_store }
    }

    /// Execute the verify token use case
    ///
    /// Fails open: an empty, forged, revoked or orphaned token resolves to the
    /// anonymous identity. Only a store failure is an error.
    #[tracing::instrument(name = "VerifyTokenUseCase::execute", skip_all)]
    pub async fn execute(&self, token: &str) -> Result<Identity, AuthError> {
        if token.is_empty() {
            return Ok(Identity::anonymous());
        }

        match self
            .credential_store
            .resolve_token(&SessionToken::from(token))
            .await
        {
            Ok(owner) => Ok(owner.into()),
            Err(CredentialStoreError::TokenNotFound) => Ok(Identity::anonymous()),
            Err(e) => Err(e.into()),
        }
    }
}
