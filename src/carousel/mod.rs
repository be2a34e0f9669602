//! Cyclic slide navigation
//!
//! This module contains the slide controller shared by the hero carousel and
//! the gallery lightbox, together with the timer schedulers that drive its
//! auto-advance.

pub mod controller;
pub mod error;
pub mod manual;
pub mod scheduler;
pub mod source;

// Re-export main types
pub use controller::CyclicSlideController;
pub use error::CarouselError;
pub use manual::ManualScheduler;
pub use scheduler::{Scheduler, Tick, TimerId, TokioScheduler};
pub use source::SlideSource;
