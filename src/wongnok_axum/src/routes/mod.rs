//! Axum route handlers for the credential endpoints.
//!
//! Handlers extract the request, call into [`wongnok_application::AuthService`]
//! and turn the result into a JSON response. Errors go through
//! [`crate::AuthApiError`] so every endpoint shares one status mapping.

pub mod me;
pub mod signin;
pub mod signout;
pub mod signup;

pub use me::me;
pub use signin::signin;
pub use signout::signout;
pub use signup::signup;

use secrecy::Secret;

/// Serde default for an absent password field, rejected later as `password required`.
pub(crate) fn empty_secret() -> Secret<String> {
    Secret::new(String::new())
}
