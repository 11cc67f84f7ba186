use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, postgres::PgPoolOptions};
use thiserror::Error;
use wongnok_adapters::{config::PostgresSetting, persistence::run_migrations};

#[derive(Debug, Error)]
pub enum PostgresSetupError {
    #[error("failed to connect to postgres: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Connects a pool from `setting` and applies pending migrations.
pub async fn configure_postgresql(setting: &PostgresSetting) -> Result<PgPool, PostgresSetupError> {
    let pg_pool = get_postgres_pool(&setting.url, setting.max_connections).await?;

    run_migrations(&pg_pool).await?;

    Ok(pg_pool)
}

/// Create a PostgreSQL connection pool
pub async fn get_postgres_pool(
    url: &Secret<String>,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url.expose_secret())
        .await
}
