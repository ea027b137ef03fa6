use std::time::Duration;

use axum_server::Handle;
use tokio::signal;

/// Waits for a termination signal and closes the listener.
///
/// Without a grace period the server stops at once and requests still in
/// flight are dropped. With one, they get up to `grace_period` to finish.
pub(crate) async fn on_signal(handle: Handle, grace_period: Option<Duration>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install SIGTERM handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    match grace_period {
        Some(grace_period) => {
            tracing::info!("Shutting down gracefully...");
            handle.graceful_shutdown(Some(grace_period));
        }
        None => {
            tracing::info!("Shutting down server");
            handle.shutdown();
        }
    }
}
