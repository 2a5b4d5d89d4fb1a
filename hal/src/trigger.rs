//! Measurement handles.
//!
//! A [`Trigger`] owns the start timestamp of one measurement, so any number
//! of measurements can be in flight without shared state. The clock reads
//! sit behind `#[inline(never)]` functions so they stay real call
//! boundaries around the timed code.

use core::fmt;

use crate::board::BoardClock;
use crate::timer::{ClockHal, Timestamp};
use crate::util::General;

/// Elapsed time of one measurement, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Elapsed(f64);

impl Elapsed {
    pub fn between<C: ClockHal>(start: Timestamp<C>, end: Timestamp<C>) -> Self {
        Elapsed(C::elapsed_ms(start, end))
    }

    pub const fn from_millis_f64(ms: f64) -> Self {
        Elapsed(ms)
    }

    pub const fn as_millis_f64(&self) -> f64 {
        self.0
    }

    /// Print the result line to stdout.
    pub fn report(&self) {
        crate::println!("{}", self);
    }
}

/// `%g` of the milliseconds, no unit suffix.
impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&General(self.0), f)
    }
}

pub struct Trigger<C: ClockHal = BoardClock> {
    start: Timestamp<C>,
}

impl<C: ClockHal> Trigger<C> {
    /// Begin a measurement.
    #[inline(never)]
    pub fn start() -> Self {
        Trigger { start: C::read() }
    }

    /// Discard the current start and take a fresh one.
    #[inline(never)]
    pub fn restart(&mut self) {
        self.start = C::read();
    }

    /// Time since start, leaving the measurement running.
    #[inline(never)]
    pub fn elapsed(&self) -> Elapsed {
        Elapsed::between(self.start, C::read())
    }

    /// End the measurement without printing.
    #[inline(never)]
    pub fn measure(self) -> Elapsed {
        let end = C::read();
        Elapsed::between(self.start, end)
    }

    /// End the measurement and print the result line.
    #[inline(never)]
    pub fn stop(self) -> Elapsed {
        let elapsed = self.measure();
        elapsed.report();
        elapsed
    }
}

/// Reports the enclosing scope's run time when dropped.
pub struct TriggerGuard<C: ClockHal = BoardClock> {
    trigger: Option<Trigger<C>>,
}

impl<C: ClockHal> TriggerGuard<C> {
    pub fn new() -> Self {
        Self { trigger: Some(Trigger::start()) }
    }

    /// Stop early and return the result instead of waiting for drop.
    pub fn finish(mut self) -> Elapsed {
        match self.trigger.take() {
            Some(trigger) => trigger.stop(),
            None => Elapsed(0.0),
        }
    }
}

impl<C: ClockHal> Default for TriggerGuard<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ClockHal> Drop for TriggerGuard<C> {
    fn drop(&mut self) {
        if let Some(trigger) = self.trigger.take() {
            trigger.stop();
        }
    }
}
