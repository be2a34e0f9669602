//! Expedition Site - headless host for the Iceland expedition website
//!
//! This library provides the slide controller shared by the hero carousel and
//! the gallery lightbox, the static site content, the booking handoff and a
//! small HTTP API that exposes all of it to a rendering client.

pub mod api;
pub mod booking;
pub mod carousel;
pub mod config;
pub mod content;
pub mod presenters;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use carousel::{CarouselError, CyclicSlideController, Scheduler, SlideSource};
pub use config::Config;
pub use state::AppState;
pub use utils::signals::shutdown_signal;
