use axum::{Json, extract::State, response::IntoResponse};
use serde::{Deserialize, Serialize};
use wongnok_application::AuthService;
use wongnok_core::{CredentialStore, PasswordHasher};

use crate::error::AuthApiError;

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct SignoutRequest {
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SignoutResponse {
    pub success: bool,
}

/// Revokes the token in the body. Unknown tokens still succeed.
#[tracing::instrument(name = "Signout", skip_all)]
pub async fn signout<S, H>(
    State(auth): State<AuthService<S, H>>,
    Json(request): Json<SignoutRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    S: CredentialStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    auth.sign_out(&request.token).await?;

    Ok(Json(SignoutResponse { success: true }))
}
