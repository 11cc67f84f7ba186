//! # Wongnok - credential and session-token service
//!
//! Facade crate re-exporting the public APIs of the workspace members so
//! applications can depend on a single crate.
//!
//! ## Structure
//!
//! - **Core domain types**: `Username`, `Password`, `SessionToken`, `Identity`, etc.
//! - **Ports**: `CredentialStore`, `PasswordHasher`
//! - **Use cases**: `SignupUseCase`, `SigninUseCase`, `SignoutUseCase`, `VerifyTokenUseCase`
//! - **Adapters**: `PostgresCredentialStore`, `HashMapCredentialStore`, `Argon2PasswordHasher`, etc.
//! - **HTTP**: `SessionGuard`, `require_admin`, `AuthServer`

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types, validation rules and ports
pub mod core {
    pub use wongnok_core::*;
}

pub use wongnok_core::{
    Identity, Password, PasswordDigest, SessionOwner, SessionToken, StoredUser, UserId, Username,
    ValidationError, ValidationErrorKind,
};

// ============================================================================
// Ports
// ============================================================================

pub use wongnok_core::{
    AuthValidator, CredentialStore, CredentialStoreError, PasswordHasher, PasswordHasherError,
};

// ============================================================================
// Application Layer
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use wongnok_application::use_cases::*;
}

pub use wongnok_application::{
    AuthError, AuthService, ErrorClass, SigninUseCase, SignoutUseCase, SignupUseCase,
    VerifyTokenUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    pub use wongnok_adapters::{config, hashing, persistence};
}

pub use wongnok_adapters::{
    hashing::Argon2PasswordHasher,
    persistence::{HashMapCredentialStore, PostgresCredentialStore, TimeoutCredentialStore},
};

// ============================================================================
// HTTP
// ============================================================================

/// Axum integration: guard, middleware, routes and error mapping
pub mod http_api {
    pub use wongnok_axum::*;
}

pub use wongnok_axum::{CurrentIdentity, SessionGuard, fetch_credential, require_admin};

pub use wongnok_auth_service::{AuthServer, helpers, shutdown};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
