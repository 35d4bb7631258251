//! Signal handling for early shutdown

use futures::stream::StreamExt;
use signal_hook_tokio::Signals;
use tracing::{info, warn};

/// Wait for SIGTERM or SIGINT and return the signal number.
///
/// If the handlers cannot be registered this never completes, so the
/// caller keeps running until its own work is done.
pub async fn shutdown_signal() -> i32 {
    let mut signals = match Signals::new([
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGINT,
    ]) {
        Ok(signals) => signals,
        Err(e) => {
            warn!("Failed to register signal handlers: {}", e);
            return std::future::pending().await;
        }
    };
    let handle = signals.handle();

    let signal = match signals.next().await {
        Some(signal) => signal,
        None => std::future::pending().await,
    };
    info!("Received signal: {}", signal);
    handle.close();
    signal
}
