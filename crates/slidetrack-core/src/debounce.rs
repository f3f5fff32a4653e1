//! Debouncing for high-frequency notifications.
//!
//! A debounced action runs once, `delay` after the *last* trigger. Every new
//! trigger before the deadline pushes the deadline back, so a burst of
//! triggers collapses into a single execution after the burst settles.
//!
//! Time is supplied by the caller. Nothing here sleeps or spawns; the owner
//! forwards its event-loop clock into [`Debouncer::trigger`] and
//! [`Debouncer::fire_if_due`], and can use [`Debouncer::time_until_fire`] to
//! decide how long to wait before polling again.
//!
//! Components that own their state embed a [`Debouncer`] directly; the slide
//! track debounces resizes this way. [`Debounced`] (built with [`debounce`])
//! is a standalone wrapper for hosts that want to debounce their own
//! callbacks, such as forwarding a settled window width to several tracks.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use slidetrack_core::debounce::debounce;
//!
//! let mut resized = debounce(Duration::from_millis(200), |width: f32| {
//!     println!("settled at {width}");
//! });
//!
//! let t0 = Instant::now();
//! resized.call(t0, 800.0);
//! resized.call(t0 + Duration::from_millis(50), 820.0);
//!
//! assert!(!resized.poll(t0 + Duration::from_millis(200)));
//! assert!(resized.poll(t0 + Duration::from_millis(250)));
//! ```

use std::fmt;
use std::time::{Duration, Instant};

use crate::logging::targets;

/// Deadline bookkeeping for a single debounced action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Create an idle debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// The quiet period required before the action fires.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the quiet period. A pending deadline keeps its old value.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Record a trigger at `now`, (re)starting the quiet period.
    pub fn trigger(&mut self, now: Instant) {
        let restarted = self.deadline.is_some();
        self.deadline = Some(now + self.delay);
        tracing::trace!(target: targets::DEBOUNCE, restarted, delay = ?self.delay, "debounce triggered");
    }

    /// Whether a trigger is waiting for its quiet period to elapse.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the pending action is due, or `None` when idle.
    ///
    /// Returns `Duration::ZERO` once the deadline has passed.
    pub fn time_until_fire(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Consume the pending trigger if its deadline has been reached.
    ///
    /// Returns `true` exactly once per settled burst of triggers.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                tracing::trace!(target: targets::DEBOUNCE, "debounce fired");
                true
            }
            _ => false,
        }
    }

    /// Drop any pending trigger without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// A callback wrapped with debounce semantics.
///
/// Not used by the track itself; this is for host code that has a callback
/// rather than a state machine to debounce.
///
/// [`call`](Self::call) records the latest arguments and restarts the quiet
/// period; [`poll`](Self::poll) invokes the wrapped callback with those
/// arguments once the period has elapsed.
pub struct Debounced<A> {
    timer: Debouncer,
    pending: Option<A>,
    callback: Box<dyn FnMut(A) + Send>,
}

impl<A> fmt::Debug for Debounced<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("timer", &self.timer)
            .field("pending", &self.pending.is_some())
            .finish()
    }
}

impl<A> Debounced<A> {
    /// Wrap `callback` so that it only runs after `delay` of quiet.
    pub fn new<F>(delay: Duration, callback: F) -> Self
    where
        F: FnMut(A) + Send + 'static,
    {
        Self {
            timer: Debouncer::new(delay),
            pending: None,
            callback: Box::new(callback),
        }
    }

    /// Invoke the wrapper. The callback is deferred; earlier pending
    /// arguments are replaced.
    pub fn call(&mut self, now: Instant, args: A) {
        self.pending = Some(args);
        self.timer.trigger(now);
    }

    /// Run the callback if the quiet period has elapsed.
    ///
    /// Returns `true` if the callback ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.timer.fire_if_due(now) {
            return false;
        }
        match self.pending.take() {
            Some(args) => {
                (self.callback)(args);
                true
            }
            None => false,
        }
    }

    /// Whether a call is waiting to be delivered.
    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Time left until the pending call is delivered.
    pub fn time_until_fire(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_fire(now)
    }

    /// Discard the pending call.
    pub fn cancel(&mut self) {
        self.timer.cancel();
        self.pending = None;
    }
}

/// Wrap `callback` with debounce semantics. See [`Debounced`].
pub fn debounce<A, F>(delay: Duration, callback: F) -> Debounced<A>
where
    F: FnMut(A) + Send + 'static,
{
    Debounced::new(delay, callback)
}
