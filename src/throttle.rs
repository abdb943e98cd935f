//! Leading-edge throttling.
//!
//! A [`Throttle`] runs the wrapped function at most once per interval. The
//! first call always runs; calls arriving before the interval has elapsed
//! since the last run are dropped and return `None`. Time is read through a
//! [`Clock`], so tests can drive it by hand.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use slotted::throttle::Throttle;
//!
//! let greet = Throttle::new(|name: &str| format!("hello, {name}"), Duration::from_secs(60));
//!
//! assert_eq!(greet.call("first"), Some("hello, first".to_string()));
//! assert_eq!(greet.call("second"), None);
//!
//! greet.reset();
//! assert_eq!(greet.call("third"), Some("hello, third".to_string()));
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::debug;

/// A source of monotonic time.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// The wall clock, backed by [`Instant::now`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Wraps a function so it runs at most once per `interval`.
///
/// Functions of several arguments take them as a tuple. The throttle is
/// `Sync` whenever the function and clock are, so it can be shared across
/// threads behind an `Arc`.
pub struct Throttle<F, C = SystemClock> {
    function: F,
    interval: Duration,
    clock: C,
    last_invocation: Mutex<Option<Instant>>,
}

impl<F> Throttle<F> {
    /// Creates a throttle that reads the system clock.
    pub fn new(function: F, interval: Duration) -> Self {
        Self::with_clock(function, interval, SystemClock)
    }
}

impl<F, C> Throttle<F, C> {
    /// Creates a throttle that reads time from `clock`.
    pub fn with_clock(function: F, interval: Duration, clock: C) -> Self {
        Self {
            function,
            interval,
            clock,
            last_invocation: Mutex::new(None),
        }
    }

    /// The minimum spacing between two runs.
    #[inline]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// When the wrapped function last ran, if it has.
    pub fn last_invocation(&self) -> Option<Instant> {
        *self.last_invocation.lock()
    }

    /// Forgets the last run, so the next call runs unconditionally.
    pub fn reset(&self) {
        *self.last_invocation.lock() = None;
    }

    /// Consumes the throttle, returning the wrapped function.
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<F, C: Clock> Throttle<F, C> {
    /// Runs the wrapped function unless it ran less than `interval` ago.
    ///
    /// Returns `None` for a dropped call. A zero interval never drops.
    pub fn call<A, R>(&self, input: A) -> Option<R>
    where
        F: Fn(A) -> R,
    {
        let now = self.clock.now();
        {
            let mut last_invocation = self.last_invocation.lock();
            if let Some(previous) = *last_invocation {
                let elapsed = now.saturating_duration_since(previous);
                if elapsed < self.interval {
                    debug!(
                        elapsed = ?elapsed,
                        interval = ?self.interval,
                        "throttled call dropped"
                    );
                    return None;
                }
            }
            *last_invocation = Some(now);
        }

        Some((self.function)(input))
    }
}

impl<F, C: fmt::Debug> fmt::Debug for Throttle<F, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Throttle")
            .field("interval", &self.interval)
            .field("clock", &self.clock)
            .field("last_invocation", &self.last_invocation())
            .finish_non_exhaustive()
    }
}
