pub mod domain;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    identity::{Identity, SessionOwner},
    password::Password,
    password_digest::PasswordDigest,
    session_token::SessionToken,
    user::{StoredUser, UserId},
    username::Username,
    validation::{ValidationError, ValidationErrorKind},
};

pub use ports::{
    repositories::{CredentialStore, CredentialStoreError},
    services::{PasswordHasher, PasswordHasherError},
};

pub use strategies::auth_validator::AuthValidator;
