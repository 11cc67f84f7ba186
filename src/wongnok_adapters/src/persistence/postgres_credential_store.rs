use sqlx::{PgPool, migrate::MigrateError};
use wongnok_core::{
    CredentialStore, CredentialStoreError, PasswordDigest, SessionOwner, SessionToken, StoredUser,
    UserId, Username,
};

/// Unique index on `users.username`, see migrations.
const USERNAME_CONSTRAINT: &str = "users_username_idx";

#[derive(Clone)]
pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresCredentialStore { pool }
    }
}

/// Applies the embedded `users` / `auth_tokens` migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

fn unexpected(e: sqlx::Error) -> CredentialStoreError {
    CredentialStoreError::UnexpectedError(e.to_string())
}

#[async_trait::async_trait]
impl CredentialStore for PostgresCredentialStore {
    #[tracing::instrument(name = "Inserting user into PostgreSQL", skip_all)]
    async fn insert_user(
        &self,
        username: &Username,
        password_digest: &PasswordDigest,
    ) -> Result<UserId, CredentialStoreError> {
        let query = sqlx::query_scalar::<_, i64>(
            r#"
                INSERT INTO users (username, password)
                VALUES ($1, $2)
                RETURNING id
            "#,
        )
        .bind(username.as_ref())
        .bind(password_digest.expose());

        let id = query.fetch_one(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some(USERNAME_CONSTRAINT)
                {
                    return CredentialStoreError::UsernameTaken;
                }
            }
            unexpected(e)
        })?;

        Ok(UserId::new(id))
    }

    #[tracing::instrument(name = "Looking up user in PostgreSQL", skip_all)]
    async fn lookup_user_by_username(
        &self,
        username: &Username,
    ) -> Result<StoredUser, CredentialStoreError> {
        let query = sqlx::query_as::<_, (i64, String, bool)>(
            r#"
                SELECT id, password, is_admin
                FROM users
                WHERE username = $1
            "#,
        )
        .bind(username.as_ref());

        let row = query.fetch_optional(&self.pool).await.map_err(unexpected)?;

        let Some((id, password, is_admin)) = row else {
            return Err(CredentialStoreError::UserNotFound);
        };

        Ok(StoredUser {
            id: UserId::new(id),
            password_digest: PasswordDigest::from(password),
            is_admin,
        })
    }

    #[tracing::instrument(name = "Issuing token in PostgreSQL", skip_all)]
    async fn issue_token(
        &self,
        token: &SessionToken,
        user_id: UserId,
    ) -> Result<(), CredentialStoreError> {
        // a primary key collision surfaces as an unexpected error, the caller retries sign-in
        sqlx::query(
            r#"
                INSERT INTO auth_tokens (id, user_id)
                VALUES ($1, $2)
            "#,
        )
        .bind(token.as_str())
        .bind(user_id.get())
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;

        Ok(())
    }

    #[tracing::instrument(name = "Deleting token from PostgreSQL", skip_all)]
    async fn delete_token(&self, token: &SessionToken) -> Result<(), CredentialStoreError> {
        sqlx::query(
            r#"
                DELETE FROM auth_tokens
                WHERE id = $1
            "#,
        )
        .bind(token.as_str())
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;

        Ok(())
    }

    #[tracing::instrument(name = "Resolving token in PostgreSQL", skip_all)]
    async fn resolve_token(
        &self,
        token: &SessionToken,
    ) -> Result<SessionOwner, CredentialStoreError> {
        let query = sqlx::query_as::<_, (i64, bool)>(
            r#"
                SELECT auth_tokens.user_id, users.is_admin
                FROM auth_tokens
                INNER JOIN users ON auth_tokens.user_id = users.id
                WHERE auth_tokens.id = $1
            "#,
        )
        .bind(token.as_str());

        let row = query.fetch_optional(&self.pool).await.map_err(unexpected)?;

        let Some((user_id, is_admin)) = row else {
            return Err(CredentialStoreError::TokenNotFound);
        };

        Ok(SessionOwner {
            user_id: UserId::new(user_id),
            is_admin,
        })
    }
}
