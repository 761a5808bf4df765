//! Position observer timer
//!
//! The timer thread does no work of its own: every interval it posts a
//! [`CastEvent::PositionTick`] into the context's event queue, and the tick
//! is handled on the thread that owns the context. Each installed timer has
//! a generation number, so ticks still queued from a replaced or removed
//! timer are recognised and dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::error::{Result, SdkError};
use crate::event::CastEvent;

/// Callback invoked with the stream position (seconds) on every tick
pub type PositionCallback = Box<dyn FnMut(f64)>;

/// Handle to a running timer thread. Dropping it stops the thread.
struct TimerHandle {
    cancelled: Arc<AtomicBool>,
}

impl TimerHandle {
    fn spawn(interval: Duration, generation: u64, events: Sender<CastEvent>) -> Result<Self> {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        thread::Builder::new()
            .name(format!("cast-position-timer-{}", generation))
            .spawn(move || loop {
                thread::sleep(interval);
                if flag.load(Ordering::Acquire) {
                    break;
                }
                if events.send(CastEvent::PositionTick { generation }).is_err() {
                    tracing::debug!("Event queue closed, stopping position timer");
                    break;
                }
            })
            .map_err(|e| SdkError::Timer(e.to_string()))?;

        Ok(Self { cancelled })
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Single-slot position observer
#[derive(Default)]
pub struct PositionTicker {
    generation: u64,
    interval: Option<Duration>,
    callback: Option<PositionCallback>,
    timer: Option<TimerHandle>,
}

impl PositionTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install an observer, replacing any existing one
    ///
    /// The previous timer is invalidated before the new one starts.
    pub fn add_observer(
        &mut self,
        interval: Duration,
        callback: PositionCallback,
        events: Sender<CastEvent>,
    ) -> Result<()> {
        if interval == Duration::ZERO {
            return Err(SdkError::InvalidInterval(interval));
        }

        self.remove_observer();

        self.generation += 1;
        self.timer = Some(TimerHandle::spawn(interval, self.generation, events)?);
        self.interval = Some(interval);
        self.callback = Some(callback);

        tracing::debug!(
            "Position observer installed (every {:?}, generation {})",
            interval,
            self.generation
        );
        Ok(())
    }

    /// Cancel the timer and drop the callback. No-op when nothing is installed.
    pub fn remove_observer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
            tracing::debug!("Position observer removed (generation {})", self.generation);
        }
        self.interval = None;
        self.callback = None;
    }

    pub fn is_active(&self) -> bool {
        self.timer.is_some()
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Generation of the current (or most recent) timer
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a tick with `generation` belongs to the installed timer
    pub fn accepts(&self, generation: u64) -> bool {
        self.timer.is_some() && generation == self.generation
    }

    /// Invoke the callback with `position`
    pub fn notify(&mut self, position: f64) {
        if let Some(callback) = self.callback.as_mut() {
            callback(position);
        }
    }
}

impl std::fmt::Debug for PositionTicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PositionTicker")
            .field("generation", &self.generation)
            .field("interval", &self.interval)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::mpsc;

    #[test]
    fn test_zero_interval_rejected() {
        let (tx, _rx) = mpsc::channel();
        let mut ticker = PositionTicker::new();

        let result = ticker.add_observer(Duration::ZERO, Box::new(|_| {}), tx);
        assert!(matches!(result, Err(SdkError::InvalidInterval(_))));
        assert!(!ticker.is_active());
    }

    #[test]
    fn test_remove_without_observer_is_noop() {
        let mut ticker = PositionTicker::new();
        ticker.remove_observer();
        ticker.remove_observer();
        assert!(!ticker.is_active());
        assert_eq!(ticker.generation(), 0);
    }

    #[test]
    fn test_replacing_observer_invalidates_old_generation() {
        let (tx, _rx) = mpsc::channel();
        let mut ticker = PositionTicker::new();

        ticker
            .add_observer(Duration::from_secs(60), Box::new(|_| {}), tx.clone())
            .unwrap();
        let first = ticker.generation();

        ticker
            .add_observer(Duration::from_secs(60), Box::new(|_| {}), tx)
            .unwrap();

        assert!(!ticker.accepts(first));
        assert!(ticker.accepts(ticker.generation()));
    }

    #[test]
    fn test_removed_observer_accepts_nothing() {
        let (tx, _rx) = mpsc::channel();
        let mut ticker = PositionTicker::new();
        ticker
            .add_observer(Duration::from_secs(60), Box::new(|_| {}), tx)
            .unwrap();
        let generation = ticker.generation();

        ticker.remove_observer();
        assert!(!ticker.accepts(generation));
        assert!(ticker.interval().is_none());
    }

    #[test]
    fn test_notify_invokes_callback() {
        let (tx, _rx) = mpsc::channel();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut ticker = PositionTicker::new();
        ticker
            .add_observer(
                Duration::from_secs(60),
                Box::new(move |pos| sink.borrow_mut().push(pos)),
                tx,
            )
            .unwrap();

        ticker.notify(1.5);
        ticker.notify(2.5);
        assert_eq!(*seen.borrow(), vec![1.5, 2.5]);
    }

    #[test]
    fn test_timer_posts_ticks() {
        let (tx, rx) = mpsc::channel();
        let mut ticker = PositionTicker::new();
        ticker
            .add_observer(Duration::from_millis(5), Box::new(|_| {}), tx)
            .unwrap();

        let event = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(
            event,
            CastEvent::PositionTick {
                generation: ticker.generation()
            }
        );
        ticker.remove_observer();
    }
}
