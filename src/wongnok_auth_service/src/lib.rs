//! Router assembly and serving for the wongnok credential service.
//!
//! [`AuthServer`] wires the HTTP routes, the credential-fetching middleware
//! and request tracing around an [`wongnok_application::AuthService`]. It can
//! run standalone or hand out a [`axum::Router`] to be mounted elsewhere.

mod auth_server;
pub mod helpers;
pub mod shutdown;
mod tracing;

pub use auth_server::AuthServer;
