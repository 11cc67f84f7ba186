use wongnok_core::{CredentialStoreError, PasswordHasherError, ValidationError};

/// How a boundary should treat an [`AuthError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Field-attributable and safe to echo to the client.
    Validation,
    /// Business-rule failure, safe to echo to the client.
    Domain,
    /// Never echoed; log it and answer with a generic message.
    Infrastructure,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("username not available")]
    UsernameNotAvailable,
    /// Deliberately the same for an unknown user and a wrong password.
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl AuthError {
    pub fn class(&self) -> ErrorClass {
        match self {
            AuthError::Validation(_) => ErrorClass::Validation,
            AuthError::UsernameNotAvailable | AuthError::InvalidCredentials => ErrorClass::Domain,
            AuthError::UnexpectedError(_) => ErrorClass::Infrastructure,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.class() == ErrorClass::Validation
    }
}

impl From<PasswordHasherError> for AuthError {
    fn from(error: PasswordHasherError) -> Self {
        AuthError::UnexpectedError(error.to_string())
    }
}

/// Fallback mapping for store errors with no operation-specific meaning.
impl From<CredentialStoreError> for AuthError {
    fn from(error: CredentialStoreError) -> Self {
        AuthError::UnexpectedError(error.to_string())
    }
}
