use axum::{Json, extract::State, response::IntoResponse};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use wongnok_application::AuthService;
use wongnok_core::{CredentialStore, PasswordHasher, UserId};

use crate::error::AuthApiError;

/// Missing fields deserialize as empty and are rejected by validation.
#[derive(Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default = "crate::routes::empty_secret")]
    pub password: Secret<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SignupResponse {
    pub success: bool,
    pub user_id: UserId,
}

#[tracing::instrument(name = "Signup", skip_all)]
pub async fn signup<S, H>(
    State(auth): State<AuthService<S, H>>,
    Json(request): Json<SignupRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    S: CredentialStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let user_id = auth.sign_up(&request.username, request.password).await?;

    Ok(Json(SignupResponse {
        success: true,
        user_id,
    }))
}
