//! Controllable clock for driving slide timers deterministically

use std::time::Duration;

use super::{
    controller::CyclicSlideController,
    scheduler::{Scheduler, TimerId},
};

#[derive(Debug, Clone)]
struct ManualTimer {
    id: TimerId,
    period: Duration,
    due: Duration,
}

/// Scheduler backed by a virtual clock that only moves on [`advance`].
///
/// Keeps counters of every `arm`/`disarm` so callers can check that timers
/// never pile up.
///
/// [`advance`]: ManualScheduler::advance
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    now: Duration,
    timers: Vec<ManualTimer>,
    registrations: usize,
    cancellations: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Timers currently armed
    pub fn live(&self) -> usize {
        self.timers.len()
    }

    /// Total `arm` calls so far
    pub fn registrations(&self) -> usize {
        self.registrations
    }

    /// Total `disarm` calls that cancelled a live timer
    pub fn cancellations(&self) -> usize {
        self.cancellations
    }

    pub fn is_armed(&self, timer: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == timer)
    }

    /// Move the clock forward and return every firing in due order
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        let target = self.now + by;
        let mut fired = Vec::new();

        while let Some(timer) = self
            .timers
            .iter_mut()
            .filter(|t| t.due <= target)
            .min_by_key(|t| t.due)
        {
            self.now = timer.due;
            timer.due += timer.period;
            fired.push(timer.id);
        }

        self.now = target;
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn arm(&mut self, timer: TimerId, period: Duration) {
        // A zero period would fire forever without moving the clock
        let period = period.max(Duration::from_nanos(1));
        self.registrations += 1;
        self.timers.push(ManualTimer {
            id: timer,
            period,
            due: self.now + period,
        });
    }

    fn disarm(&mut self, timer: TimerId) {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != timer);
        self.cancellations += before - self.timers.len();
    }
}

impl CyclicSlideController<ManualScheduler> {
    /// Advance the virtual clock and deliver each firing to the controller.
    ///
    /// Returns how many firings actually moved the index.
    pub fn advance_clock(&mut self, by: Duration) -> usize {
        let fired = self.scheduler_mut().advance(by);
        fired
            .into_iter()
            .filter(|&timer| self.on_timer(timer))
            .count()
    }
}
