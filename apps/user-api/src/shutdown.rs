use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio::sync::Notify;

/// Resolves on Ctrl+C or SIGTERM and records the signal on `signalled`.
/// A handler that fails to install never fires instead of taking the server
/// down.
pub async fn shutdown_signal(signalled: Arc<Notify>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM, initiating graceful shutdown");
        }
    }

    signalled.notify_one();
}

/// Drives `server` to completion, but once `signalled` fires it only gets
/// `drain_timeout` more. Returns `None` when the drain was cut short.
pub async fn run_with_drain_timeout<F>(
    server: F,
    signalled: Arc<Notify>,
    drain_timeout: Duration,
) -> Option<F::Output>
where
    F: Future,
{
    tokio::pin!(server);

    tokio::select! {
        output = &mut server => return Some(output),
        _ = signalled.notified() => {}
    }

    tracing::info!(
        timeout_secs = drain_timeout.as_secs(),
        "allowing connections to drain"
    );

    match tokio::time::timeout(drain_timeout, server).await {
        Ok(output) => Some(output),
        Err(_) => {
            tracing::warn!(
                timeout_secs = drain_timeout.as_secs(),
                "drain timeout elapsed, closing remaining connections"
            );
            None
        }
    }
}
