//! Auto-advance background task

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::{carousel::Tick, presenters::CarouselKey, state::AppState};

/// Background task that feeds carousel timer ticks into the shared state.
///
/// Timer tasks never touch the presenters themselves; every advance happens
/// here under the site lock. Returns once all tick senders are gone.
pub async fn auto_advance_task(
    state: Arc<AppState>,
    mut ticks: mpsc::UnboundedReceiver<Tick<CarouselKey>>,
) {
    info!("Starting auto-advance task");

    while let Some(tick) = ticks.recv().await {
        match state.apply_tick(tick.clone()) {
            Ok(true) => {}
            Ok(false) => {
                debug!("Dropped stale {:?} tick {}", tick.key, tick.timer);
            }
            Err(e) => {
                error!("Failed to apply {:?} tick: {}", tick.key, e);
            }
        }
    }

    info!("Auto-advance task stopped");
}
