//! Process signal handling for graceful shutdown.

use std::time::Duration;

use tokio::signal;

/// Completes on the first Ctrl-C or SIGTERM.
///
/// Once triggered, a background task exits the process with status 1 on a
/// second Ctrl-C or after `grace_period`, whichever comes first, so a stuck
/// drain cannot keep the process alive.
pub async fn shutdown_signal(grace_period: Duration) {
    wait_for_signal().await;
    tracing::info!(
        grace_period_secs = grace_period.as_secs(),
        "shutdown requested, draining in-flight requests"
    );

    tokio::spawn(async move {
        tokio::select! {
            _ = signal::ctrl_c() => {
                tracing::warn!("second interrupt received, forcing exit");
            }
            _ = tokio::time::sleep(grace_period) => {
                tracing::warn!("grace period elapsed, forcing exit");
            }
        }
        std::process::exit(1);
    });
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
