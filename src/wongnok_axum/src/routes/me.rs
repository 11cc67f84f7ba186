use axum::{Json, response::IntoResponse};

use crate::guard::CurrentIdentity;

/// Echoes the identity resolved for the request, `null` user for anonymous callers.
#[tracing::instrument(name = "Me", skip_all)]
pub async fn me(CurrentIdentity(identity): CurrentIdentity) -> impl IntoResponse {
    Json(identity)
}
