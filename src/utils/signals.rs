//! Signal handling for graceful shutdown

use futures::stream::StreamExt;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use std::io;
use tracing::info;

/// Register for the signals that stop the host (SIGTERM, SIGINT)
pub fn shutdown_signals() -> io::Result<Signals> {
    Signals::new([SIGTERM, SIGINT])
}

/// Wait for the first registered signal. `None` if the stream closed.
pub async fn shutdown_signal(mut signals: Signals) -> Option<i32> {
    let signal = signals.next().await?;
    info!("Received signal: {}", signal);
    signals.handle().close();
    Some(signal)
}
