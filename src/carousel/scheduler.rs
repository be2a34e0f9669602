//! Cancellable recurring timers for slide auto-advance

use std::{
    collections::HashMap,
    fmt,
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};
use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, trace};

static NEXT_TIMER_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of one armed timer. Ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Allocate a fresh id
    pub fn next() -> Self {
        Self(NEXT_TIMER_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Something that can arm and disarm a recurring timer.
///
/// When an armed timer fires, the owner of the scheduler is expected to hand
/// the `TimerId` back to the controller (see `CyclicSlideController::on_timer`).
/// `disarm` must guarantee the timer does not fire again.
pub trait Scheduler {
    /// Start a timer that fires every `period`, first after one full period
    fn arm(&mut self, timer: TimerId, period: Duration);

    /// Cancel a timer. Unknown ids are ignored.
    fn disarm(&mut self, timer: TimerId);
}

/// A tick emitted by a [`TokioScheduler`] timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick<K> {
    /// Which carousel the timer belongs to
    pub key: K,
    pub timer: TimerId,
}

/// Runs each armed timer as a tokio task that sends [`Tick`]s on a channel.
///
/// Must be used from within a tokio runtime.
pub struct TokioScheduler<K> {
    key: K,
    tx: mpsc::UnboundedSender<Tick<K>>,
    live: HashMap<TimerId, JoinHandle<()>>,
}

impl<K> TokioScheduler<K>
where
    K: Clone + fmt::Debug + Send + 'static,
{
    pub fn new(key: K, tx: mpsc::UnboundedSender<Tick<K>>) -> Self {
        Self {
            key,
            tx,
            live: HashMap::new(),
        }
    }

    /// Number of timer tasks currently running
    pub fn live(&self) -> usize {
        self.live.len()
    }
}

impl<K> Scheduler for TokioScheduler<K>
where
    K: Clone + fmt::Debug + Send + 'static,
{
    fn arm(&mut self, timer: TimerId, period: Duration) {
        let key = self.key.clone();
        let tx = self.tx.clone();
        let first = Instant::now() + period;

        let handle = tokio::spawn(async move {
            let mut interval = interval_at(first, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                trace!("{:?} {} fired", key, timer);
                if tx.send(Tick { key: key.clone(), timer }).is_err() {
                    // Receiver gone, nobody left to advance
                    break;
                }
            }
        });

        debug!("Armed {:?} {} every {:?}", self.key, timer, period);
        if let Some(previous) = self.live.insert(timer, handle) {
            previous.abort();
        }
    }

    fn disarm(&mut self, timer: TimerId) {
        if let Some(handle) = self.live.remove(&timer) {
            handle.abort();
            debug!("Disarmed {:?} {}", self.key, timer);
        }
    }
}

impl<K: Clone> Clone for TokioScheduler<K> {
    /// Clones share the tick channel but start with no running timers
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            tx: self.tx.clone(),
            live: HashMap::new(),
        }
    }
}

impl<K> Drop for TokioScheduler<K> {
    fn drop(&mut self) {
        for (_, handle) in self.live.drain() {
            handle.abort();
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for TokioScheduler<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokioScheduler")
            .field("key", &self.key)
            .field("live", &self.live.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_ids_are_unique() {
        let a = TimerId::next();
        let b = TimerId::next();
        assert_ne!(a, b);
        assert!(b.get() > a.get());
    }

    #[tokio::test(start_paused = true)]
    async fn armed_timer_ticks_every_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new("hero", tx);
        let timer = TimerId::next();

        scheduler.arm(timer, Duration::from_millis(4000));
        assert_eq!(scheduler.live(), 1);

        tokio::time::sleep(Duration::from_millis(3999)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(rx.try_recv(), Ok(Tick { key: "hero", timer }));

        tokio::time::sleep(Duration::from_millis(4000)).await;
        assert_eq!(rx.try_recv(), Ok(Tick { key: "hero", timer }));
    }

    #[tokio::test(start_paused = true)]
    async fn disarmed_timer_stops_ticking() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new("lightbox", tx);
        let timer = TimerId::next();

        scheduler.arm(timer, Duration::from_millis(1000));
        scheduler.disarm(timer);
        assert_eq!(scheduler.live(), 0);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_scheduler_aborts_timers() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new(0u8, tx);
        scheduler.arm(TimerId::next(), Duration::from_millis(500));
        drop(scheduler);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }
}
