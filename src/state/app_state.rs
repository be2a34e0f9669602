//! Main application state management

use std::{
    sync::{Mutex, MutexGuard},
    time::{Duration, Instant},
};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use super::SiteSnapshot;
use crate::{
    booking::{BookingError, BookingHandoff, BookingRequest},
    carousel::{CarouselError, Tick, TokioScheduler},
    presenters::{
        CarouselKey, Command, HeroPresenter, InputEvent, LightboxPresenter, PresenterError,
    },
};

/// Scheduler used by the hosted presenters
pub type HostScheduler = TokioScheduler<CarouselKey>;

/// Errors surfaced by state operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error(transparent)]
    Presenter(#[from] PresenterError),

    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error("failed to lock site state: {0}")]
    LockPoisoned(String),

    #[error("carousel has no slide at its current index")]
    MissingSlide,
}

impl From<CarouselError> for StateError {
    fn from(err: CarouselError) -> Self {
        Self::Presenter(PresenterError::Carousel(err))
    }
}

/// Runtime settings the state is built from
#[derive(Debug, Clone)]
pub struct HostSettings {
    pub host: String,
    pub port: u16,
    pub hero_interval: Duration,
    pub lightbox_interval: Duration,
    pub booking_url: String,
}

/// The presenters one visitor session would mount
#[derive(Debug)]
pub struct Site {
    pub hero: HeroPresenter<HostScheduler>,
    pub lightbox: LightboxPresenter<HostScheduler>,
}

impl Site {
    fn snapshot(&self) -> Result<SiteSnapshot, StateError> {
        Ok(SiteSnapshot {
            hero: self.hero.snapshot().ok_or(StateError::MissingSlide)?,
            lightbox: self.lightbox.snapshot(),
        })
    }
}

/// Shared state of the preview host
#[derive(Debug)]
pub struct AppState {
    /// Hosted presenters. Every transition happens under this lock.
    pub site: Mutex<Site>,
    pub settings: HostSettings,
    /// Server metadata
    pub start_time: Instant,
    /// Last action tracking
    pub last_action: Mutex<Option<String>>,
    pub last_action_time: Mutex<Option<DateTime<Utc>>>,
    /// Fresh snapshot after every change; streamed to clients by `GET /events`
    pub snapshot_tx: watch::Sender<SiteSnapshot>,
    /// Keep the receiver alive to prevent channel closure
    pub _snapshot_rx: watch::Receiver<SiteSnapshot>,
}

impl AppState {
    /// Mount the hero and an empty lightbox. Timer ticks are sent on `ticks`.
    ///
    /// Must be called inside a tokio runtime since the hero starts playing
    /// right away.
    pub fn new(
        settings: HostSettings,
        ticks: mpsc::UnboundedSender<Tick<CarouselKey>>,
    ) -> Result<Self, StateError> {
        let hero = HeroPresenter::with_site_images(
            settings.hero_interval,
            TokioScheduler::new(CarouselKey::Hero, ticks.clone()),
        )?;
        let lightbox = LightboxPresenter::with_site_images(
            settings.lightbox_interval,
            TokioScheduler::new(CarouselKey::Lightbox, ticks),
        );

        let site = Site { hero, lightbox };
        let (snapshot_tx, snapshot_rx) = watch::channel(site.snapshot()?);

        Ok(Self {
            site: Mutex::new(site),
            settings,
            start_time: Instant::now(),
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
            snapshot_tx,
            _snapshot_rx: snapshot_rx,
        })
    }

    fn lock_site(&self) -> Result<MutexGuard<'_, Site>, StateError> {
        self.site
            .lock()
            .map_err(|e| StateError::LockPoisoned(e.to_string()))
    }

    /// Apply a transition to the site and publish the resulting snapshot
    pub fn update_site<F>(&self, action: &str, updater: F) -> Result<SiteSnapshot, StateError>
    where
        F: FnOnce(&mut Site) -> Result<(), PresenterError>,
    {
        let mut site = self.lock_site()?;
        updater(&mut *site)?;
        let snapshot = site.snapshot()?;
        drop(site); // Release the lock early

        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        self.publish(snapshot.clone());
        Ok(snapshot)
    }

    fn publish(&self, snapshot: SiteSnapshot) {
        if let Err(e) = self.snapshot_tx.send(snapshot) {
            warn!("Failed to publish site snapshot: {}", e);
        }
    }

    /// Current state of both carousels
    pub fn snapshot(&self) -> Result<SiteSnapshot, StateError> {
        self.lock_site()?.snapshot()
    }

    /// Watch every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<SiteSnapshot> {
        self.snapshot_tx.subscribe()
    }

    pub fn hero_next(&self) -> Result<SiteSnapshot, StateError> {
        self.update_site("hero-next", |site| {
            site.hero.controller_mut().next();
            Ok(())
        })
    }

    pub fn hero_prev(&self) -> Result<SiteSnapshot, StateError> {
        self.update_site("hero-prev", |site| {
            site.hero.controller_mut().prev();
            Ok(())
        })
    }

    pub fn hero_go_to(&self, index: i64) -> Result<SiteSnapshot, StateError> {
        self.update_site("hero-goto", |site| {
            let index = slide_index(index, site.hero.controller().count())?;
            site.hero.controller_mut().go_to(index)?;
            Ok(())
        })
    }

    pub fn hero_set_playing(&self, playing: bool) -> Result<SiteSnapshot, StateError> {
        info!("Setting hero playback to: {}", playing);
        self.update_site(if playing { "hero-play" } else { "hero-pause" }, |site| {
            site.hero.set_playing(playing)
        })
    }

    pub fn hero_input(&self, event: InputEvent) -> Result<SiteSnapshot, StateError> {
        self.update_site("hero-input", |site| site.hero.handle(event).map(|_| ()))
    }

    pub fn lightbox_open(&self, index: i64) -> Result<SiteSnapshot, StateError> {
        self.update_site("lightbox-open", |site| {
            let index = slide_index(index, site.lightbox.slide_count())?;
            site.lightbox.open(index)
        })
    }

    pub fn lightbox_close(&self) -> Result<SiteSnapshot, StateError> {
        self.update_site("lightbox-close", |site| {
            if !site.lightbox.close() {
                debug!("Lightbox already closed");
            }
            Ok(())
        })
    }

    pub fn lightbox_next(&self) -> Result<SiteSnapshot, StateError> {
        self.update_site("lightbox-next", |site| {
            site.lightbox.apply(Command::Next)
        })
    }

    pub fn lightbox_prev(&self) -> Result<SiteSnapshot, StateError> {
        self.update_site("lightbox-prev", |site| {
            site.lightbox.apply(Command::Prev)
        })
    }

    pub fn lightbox_go_to(&self, index: i64) -> Result<SiteSnapshot, StateError> {
        self.update_site("lightbox-goto", |site| {
            if !site.lightbox.is_open() {
                return Err(PresenterError::LightboxClosed);
            }
            let index = slide_index(index, site.lightbox.slide_count())?;
            site.lightbox.apply(Command::GoTo(index))
        })
    }

    pub fn lightbox_set_playing(&self, playing: bool) -> Result<SiteSnapshot, StateError> {
        info!("Setting lightbox slideshow to: {}", playing);
        self.update_site(
            if playing { "lightbox-play" } else { "lightbox-pause" },
            |site| site.lightbox.set_playing(playing),
        )
    }

    pub fn lightbox_input(&self, event: InputEvent) -> Result<SiteSnapshot, StateError> {
        self.update_site("lightbox-input", |site| {
            site.lightbox.handle(event).map(|_| ())
        })
    }

    /// Deliver a timer tick (internal use only). Stale ticks are dropped
    /// without publishing anything.
    pub fn apply_tick(&self, tick: Tick<CarouselKey>) -> Result<bool, StateError> {
        let mut site = self.lock_site()?;
        let advanced = match tick.key {
            CarouselKey::Hero => site.hero.on_timer(tick.timer),
            CarouselKey::Lightbox => site.lightbox.on_timer(tick.timer),
        };
        if !advanced {
            return Ok(false);
        }

        let snapshot = site.snapshot()?;
        drop(site);

        debug!("{:?} auto-advanced", tick.key);
        self.publish(snapshot);
        Ok(true)
    }

    /// Compose a booking handoff with the configured messaging link
    pub fn booking(&self, request: &BookingRequest) -> Result<BookingHandoff, StateError> {
        let handoff = request.handoff(&self.settings.booking_url)?;

        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some("booking".to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        Ok(handoff)
    }

    /// Unmount everything and release all timers
    pub fn shutdown(&self) -> Result<(), StateError> {
        let mut site = self.lock_site()?;
        site.hero.unmount();
        site.lightbox.close();
        info!("All carousels released");
        Ok(())
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

/// Convert a client-supplied index, rejecting negatives as out of range
fn slide_index(index: i64, count: usize) -> Result<usize, CarouselError> {
    usize::try_from(index).map_err(|_| CarouselError::out_of_range(index, count))
}
