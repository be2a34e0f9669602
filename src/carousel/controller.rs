//! Cyclic slide controller with single-flight auto-advance

use std::time::Duration;
use tracing::{debug, info, trace};

use super::{
    error::CarouselError,
    scheduler::{Scheduler, TimerId},
};

/// Owns the current position in a fixed-size slide sequence.
///
/// The index is only ever moved through the navigation methods and always
/// satisfies `current_index() < count()`. Auto-advance runs through a single
/// timer obtained from the scheduler; every playback transition disarms the
/// previous timer before arming a new one.
#[derive(Debug)]
pub struct CyclicSlideController<S: Scheduler> {
    count: usize,
    current: usize,
    playing: bool,
    suspended: bool,
    interval: Duration,
    scheduler: S,
    armed: Option<TimerId>,
    destroyed: bool,
}

impl<S: Scheduler> CyclicSlideController<S> {
    /// Create a controller positioned on the first slide.
    ///
    /// Fails when there are no slides, or when auto-play is requested with a
    /// zero interval.
    pub fn create(
        count: usize,
        interval: Duration,
        auto_play: bool,
        scheduler: S,
    ) -> Result<Self, CarouselError> {
        if count == 0 {
            return Err(CarouselError::InvalidArgument(
                "a slide controller needs at least one slide".to_string(),
            ));
        }
        if auto_play && interval.is_zero() {
            return Err(CarouselError::InvalidArgument(
                "auto-play requires a positive interval".to_string(),
            ));
        }

        let mut controller = Self {
            count,
            current: 0,
            playing: auto_play,
            suspended: false,
            interval,
            scheduler,
            armed: None,
            destroyed: false,
        };
        controller.rearm();

        debug!(
            "Created slide controller: count={}, interval={:?}, auto_play={}",
            count, interval, auto_play
        );
        Ok(controller)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The timer currently armed, if auto-advance is live
    pub fn armed_timer(&self) -> Option<TimerId> {
        self.armed
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Move to the following slide, wrapping to the first
    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.count;
        trace!("next -> {}", self.current);
        self.current
    }

    /// Move to the preceding slide, wrapping to the last
    pub fn prev(&mut self) -> usize {
        self.current = (self.current + self.count - 1) % self.count;
        trace!("prev -> {}", self.current);
        self.current
    }

    /// Jump straight to `index`. Out-of-range indices are rejected, never clamped.
    pub fn go_to(&mut self, index: usize) -> Result<usize, CarouselError> {
        if index >= self.count {
            let signed = i64::try_from(index).unwrap_or(i64::MAX);
            return Err(CarouselError::out_of_range(signed, self.count));
        }
        self.current = index;
        trace!("go_to -> {}", self.current);
        Ok(self.current)
    }

    /// Start or stop auto-advance. Repeating the current state changes nothing.
    pub fn set_playing(&mut self, playing: bool) -> Result<(), CarouselError> {
        if playing == self.playing {
            return Ok(());
        }
        if playing && self.interval.is_zero() {
            return Err(CarouselError::InvalidArgument(
                "cannot auto-play with a zero interval".to_string(),
            ));
        }

        info!("Slide playback {}", if playing { "started" } else { "stopped" });
        self.playing = playing;
        self.rearm();
        Ok(())
    }

    /// Pause auto-advance for user interaction
    pub fn suspend(&mut self) {
        if self.suspended {
            return;
        }
        debug!("Slide auto-advance suspended");
        self.suspended = true;
        self.rearm();
    }

    /// Lift a suspension. The next advance comes one full interval from now.
    pub fn resume(&mut self) {
        if !self.suspended {
            return;
        }
        debug!("Slide auto-advance resumed");
        self.suspended = false;
        self.rearm();
    }

    /// Deliver a timer firing. Only the currently armed timer advances the
    /// index; anything else is a stale tick and is dropped.
    pub fn on_timer(&mut self, timer: TimerId) -> bool {
        if self.destroyed || self.armed != Some(timer) {
            trace!("Ignoring stale {}", timer);
            return false;
        }
        self.next();
        true
    }

    /// Release the timer for good. Safe to call more than once.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.disarm();
        self.destroyed = true;
        debug!("Slide controller destroyed");
    }

    fn rearm(&mut self) {
        self.disarm();
        if self.playing && !self.suspended && !self.destroyed {
            let timer = TimerId::next();
            self.scheduler.arm(timer, self.interval);
            self.armed = Some(timer);
        }
    }

    fn disarm(&mut self) {
        if let Some(timer) = self.armed.take() {
            self.scheduler.disarm(timer);
        }
    }
}

impl<S: Scheduler> Drop for CyclicSlideController<S> {
    fn drop(&mut self) {
        self.destroy();
    }
}
