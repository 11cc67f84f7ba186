//! Axum integration for the wongnok credential and session-token service.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  wongnok_application: AuthService        │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  wongnok_axum                            │
//! │  - SessionGuard + fetch_credential       │
//! │  - require_admin, CurrentIdentity        │
//! │  - signup / signin / signout / me routes │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let guard = SessionGuard::new(auth.clone());
//! let app = Router::new()
//!     .route("/auth/signin", post(routes::signin::<S, H>))
//!     .with_state(auth)
//!     .layer(middleware::from_fn_with_state(guard, fetch_credential::<S, H>));
//! ```

pub mod error;
pub mod guard;
pub mod routes;

pub use error::{AuthApiError, ErrorResponse};
pub use guard::{CurrentIdentity, SessionGuard, fetch_credential, require_admin};
