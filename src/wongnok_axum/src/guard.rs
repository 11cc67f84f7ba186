//! Request-level identity resolution.

use std::convert::Infallible;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http::{HeaderMap, header::AUTHORIZATION, request::Parts};
use wongnok_application::{AuthError, AuthService};
use wongnok_core::{AuthValidator, CredentialStore, Identity, PasswordHasher};

use crate::error::AuthApiError;

const BEARER_SCHEME: &str = "bearer";

/// Resolves the credential carried by a request into an [`Identity`].
#[derive(Clone)]
pub struct SessionGuard<S, H> {
    auth: AuthService<S, H>,
}

impl<S, H> SessionGuard<S, H>
where
    S: CredentialStore,
    H: PasswordHasher,
{
    pub fn new(auth: AuthService<S, H>) -> Self {
        Self { auth }
    }

    /// Anonymous when no credential is given or it does not resolve to a
    /// live session. Errors only when the store fails.
    pub async fn resolve(&self, credential: Option<&str>) -> Result<Identity, AuthError> {
        self.auth.verify_token(credential.unwrap_or_default()).await
    }
}

/// Reads the token from `Authorization`, accepting a raw token or `Bearer <token>`.
pub fn credential_from_headers(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();

    // The scheme is case-insensitive; a bare scheme carries no token.
    let token = match value.split_once(char::is_whitespace) {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case(BEARER_SCHEME) => rest.trim(),
        None if value.eq_ignore_ascii_case(BEARER_SCHEME) => "",
        _ => value,
    };
    (!token.is_empty()).then_some(token)
}

#[async_trait]
impl<S, H> AuthValidator for SessionGuard<S, H>
where
    S: CredentialStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    type Claims = Identity;
    type RequestParts = Parts;
    type Error = AuthError;

    async fn validate(&self, parts: &Self::RequestParts) -> Result<Self::Claims, Self::Error> {
        self.resolve(credential_from_headers(&parts.headers)).await
    }
}

/// Middleware attaching the caller's [`Identity`] to the request extensions.
///
/// A store failure ends the request with a 500; an unknown token does not.
pub async fn fetch_credential<S, H>(
    State(guard): State<SessionGuard<S, H>>,
    request: Request,
    next: Next,
) -> Response
where
    S: CredentialStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let (mut parts, body) = request.into_parts();

    match guard.validate(&parts).await {
        Ok(identity) => {
            parts.extensions.insert(identity);
            next.run(Request::from_parts(parts, body)).await
        }
        Err(e) => AuthApiError::from(e).into_response(),
    }
}

/// Middleware rejecting every caller whose identity is not an administrator.
pub async fn require_admin(
    CurrentIdentity(identity): CurrentIdentity,
    request: Request,
    next: Next,
) -> Response {
    if !identity.is_admin {
        return AuthApiError::Forbidden.into_response();
    }
    next.run(request).await
}

/// The identity resolved by [`fetch_credential`], anonymous if the
/// middleware did not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentIdentity(pub Identity);

impl<St> FromRequestParts<St> for CurrentIdentity
where
    St: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &St) -> Result<Self, Self::Rejection> {
        Ok(Self(
            parts
                .extensions
                .get::<Identity>()
                .copied()
                .unwrap_or_default(),
        ))
    }
}
