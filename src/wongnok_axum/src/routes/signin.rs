use axum::{Json, extract::State, response::IntoResponse};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use wongnok_application::AuthService;
use wongnok_core::{CredentialStore, PasswordHasher};

use crate::error::AuthApiError;

#[derive(Deserialize)]
pub struct SigninRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default = "crate::routes::empty_secret")]
    pub password: Secret<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SigninResponse {
    pub success: bool,
    pub token: String,
}

#[tracing::instrument(name = "Signin", skip_all)]
pub async fn signin<S, H>(
    State(auth): State<AuthService<S, H>>,
    Json(request): Json<SigninRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    S: CredentialStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let token = auth.sign_in(&request.username, request.password).await?;

    Ok(Json(SigninResponse {
        success: true,
        token: token.as_str().to_owned(),
    }))
}
