use color_eyre::eyre::Result;
use tokio::net::TcpListener;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wongnok::{
    Argon2PasswordHasher, AuthServer, AuthService, PostgresCredentialStore, TimeoutCredentialStore,
    adapters::config::AuthServiceSetting, helpers::configure_postgresql, shutdown::shutdown_signal,
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    tracing::info!(
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        "starting"
    );

    let config = AuthServiceSetting::load()?;

    let pg_pool = configure_postgresql(&config.postgres).await?;

    let credential_store = TimeoutCredentialStore::new(
        PostgresCredentialStore::new(pg_pool),
        config.auth.store_timeout(),
    );
    let auth_service = AuthService::new(credential_store, Argon2PasswordHasher::default());

    let listener = TcpListener::bind(config.application.address()).await?;

    AuthServer::new(auth_service)
        .run_standalone(listener, shutdown_signal(config.shutdown.grace_period()))
        .await?;

    tracing::info!("shut down cleanly");

    Ok(())
}

fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
