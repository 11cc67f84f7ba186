use async_trait::async_trait;

/// Trait for resolving the caller's identity in request middleware.
///
/// Validators extract credentials from request parts and turn them into
/// claims for downstream handlers. For opaque session tokens the claims are
/// the resolved identity, and a missing or unknown token is not an error:
/// only failures of the backing store are.
///
/// # Implementation Note
///
/// The validator receives `RequestParts` (headers, method, URI, extensions) rather
/// than the full `Request` to avoid issues with non-`Sync` request bodies.
#[async_trait]
pub trait AuthValidator: Clone + Send + Sync + 'static {
    /// The claims/session data made available to route handlers.
    type Claims: Clone + Send + Sync + 'static;

    /// Typically `http::request::Parts`.
    type RequestParts: Sync;

    type Error: std::error::Error + Send + Sync + 'static;

    async fn validate(&self, parts: &Self::RequestParts) -> Result<Self::Claims, Self::Error>;
}
