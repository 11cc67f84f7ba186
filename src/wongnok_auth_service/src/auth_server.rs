use std::future::Future;

use axum::{
    Router,
    http::StatusCode,
    middleware,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use wongnok_application::AuthService;
use wongnok_axum::{
    SessionGuard, fetch_credential, require_admin,
    routes::{me, signin, signout, signup},
};
use wongnok_core::{CredentialStore, PasswordHasher};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// HTTP front of an [`AuthService`].
///
/// Every route, including the ones added with [`AuthServer::with_routes`] and
/// [`AuthServer::with_admin_routes`], sees the caller's resolved identity
/// through [`wongnok_axum::CurrentIdentity`].
pub struct AuthServer<S, H> {
    auth: AuthService<S, H>,
    routes: Option<Router>,
    admin_routes: Option<Router>,
}

impl<S, H> AuthServer<S, H>
where
    S: CredentialStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    pub fn new(auth: AuthService<S, H>) -> Self {
        Self {
            auth,
            routes: None,
            admin_routes: None,
        }
    }

    /// Adds application routes served next to the auth routes.
    pub fn with_routes(mut self, routes: Router) -> Self {
        self.routes = Some(merge(self.routes, routes));
        self
    }

    /// Adds routes that answer 403 unless the caller is an administrator.
    ///
    /// `routes` must contain at least one route.
    pub fn with_admin_routes(mut self, routes: Router) -> Self {
        self.admin_routes = Some(merge(self.admin_routes, routes));
        self
    }

    /// Builds the complete router, including the trace layer.
    pub fn as_router(self) -> Router {
        let guard = SessionGuard::new(self.auth.clone());

        let mut router = Router::new()
            .route("/auth/signup", post(signup::<S, H>))
            .route("/auth/signin", post(signin::<S, H>))
            .route("/auth/signout", post(signout::<S, H>))
            .route("/auth/me", get(me))
            .with_state(self.auth);

        if let Some(routes) = self.routes {
            router = router.merge(routes);
        }
        if let Some(admin_routes) = self.admin_routes {
            router = router.merge(admin_routes.route_layer(middleware::from_fn(require_admin)));
        }

        router
            .layer(middleware::from_fn_with_state(
                guard,
                fetch_credential::<S, H>,
            ))
            .route("/healthz", get(healthz))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_span_with_request_id)
                    .on_request(on_request)
                    .on_response(on_response),
            )
    }

    /// Serves until `shutdown` completes, then drains in-flight requests.
    pub async fn run_standalone<F>(
        self,
        listener: TcpListener,
        shutdown: F,
    ) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.as_router();

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
    }
}

fn merge(existing: Option<Router>, routes: Router) -> Router {
    match existing {
        Some(existing) => existing.merge(routes),
        None => routes,
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
