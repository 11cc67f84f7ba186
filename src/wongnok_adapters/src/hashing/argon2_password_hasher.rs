use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher as _, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};
use wongnok_core::{Password, PasswordDigest, PasswordHasher, PasswordHasherError};

/// Argon2id hasher producing PHC strings.
///
/// Hashing is CPU bound, so both operations run on the blocking pool.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        // m = 15000 KiB, t = 2, p = 1
        let params = Params::new(15000, 2, 1, None).unwrap_or_default();
        Self::new(params)
    }
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<PasswordDigest, PasswordHasherError> {
        let current_span: tracing::Span = tracing::Span::current();
        let argon2 = self.argon2();
        let password = password.clone();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| compute_password_hash(&argon2, password.as_ref()))
        })
        .await
        .map_err(|e| PasswordHasherError(e.to_string()))?;

        result.map(PasswordDigest::new)
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(&self, digest: &PasswordDigest, candidate: &Password) -> bool {
        let current_span: tracing::Span = tracing::Span::current();
        let argon2 = self.argon2();
        let digest = digest.clone();
        let candidate = candidate.clone();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| verify_password_hash(&argon2, &digest, candidate.as_ref()))
        })
        .await;

        match result {
            Ok(matched) => matched,
            Err(e) => {
                tracing::error!(error = %e, "password verification task failed");
                false
            }
        }
    }
}

fn compute_password_hash(
    argon2: &Argon2<'_>,
    password: &Secret<String>,
) -> Result<Secret<String>, PasswordHasherError> {
    let salt: SaltString = SaltString::generate(rand_core::OsRng);
    argon2
        .hash_password(password.expose_secret().as_bytes(), &salt)
        .map(|h| Secret::from(h.to_string()))
        .map_err(|e| PasswordHasherError(e.to_string()))
}

fn verify_password_hash(
    argon2: &Argon2<'_>,
    digest: &PasswordDigest,
    candidate: &Secret<String>,
) -> bool {
    let expected = match PasswordHash::new(digest.expose()) {
        Ok(expected) => expected,
        Err(e) => {
            tracing::warn!(error = %e, "stored password digest is malformed");
            return false;
        }
    };

    // the digest's own parameters win over the hasher's
    argon2
        .verify_password(candidate.expose_secret().as_bytes(), &expected)
        .is_ok()
}
