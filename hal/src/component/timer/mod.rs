//! Timer Hardware abstraction layer

use core::{fmt, marker::PhantomData};

/// Sub-second resolution of a clock source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// `timespec`-style clocks
    Nanos,
    /// `timeval`-style clocks
    Micros,
}

impl Resolution {
    /// seconds per sub-second tick
    pub const fn scale(self) -> f64 {
        match self {
            Resolution::Nanos => 1.0e-9,
            Resolution::Micros => 1.0e-6,
        }
    }

    /// one tick in milliseconds
    pub fn as_millis_f64(self) -> f64 {
        self.scale() * 1.0e3
    }
}

/// A point in time read from clock `C`.
///
/// `subsec` counts ticks of `C::RESOLUTION`, so two timestamps can only be
/// subtracted when they come from the same clock.
pub struct Timestamp<C> {
    secs: i64,
    subsec: i64,
    _clock: PhantomData<fn() -> C>,
}

impl<C> Timestamp<C> {
    /// the clock origin
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(secs: i64, subsec: i64) -> Self {
        Self { secs, subsec, _clock: PhantomData }
    }
}

impl<C> Clone for Timestamp<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Timestamp<C> {}

impl<C> PartialEq for Timestamp<C> {
    fn eq(&self, other: &Self) -> bool {
        self.secs == other.secs && self.subsec == other.subsec
    }
}

impl<C> Eq for Timestamp<C> {}

impl<C> fmt::Debug for Timestamp<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timestamp")
            .field("secs", &self.secs)
            .field("subsec", &self.subsec)
            .finish()
    }
}

/// Failure of the platform clock call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockError {
    /// the libc call returned a non-zero status
    Read { clock: &'static str, status: i32 },
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockError::Read { clock, status } => {
                write!(f, "reading {} failed with status {}", clock, status)
            }
        }
    }
}

pub trait ClockHal: Sized {
    /// resolution of `Timestamp::subsec`
    const RESOLUTION: Resolution;
    /// name of the underlying clock, for diagnostics
    const NAME: &'static str;

    /// read the clock
    fn try_read() -> Result<Timestamp<Self>, ClockError>;

    /// read the clock, treating failure as fatal
    ///
    /// A wrong timestamp would silently corrupt every result of the run, so
    /// there is no fallback value.
    fn read() -> Timestamp<Self> {
        match Self::try_read() {
            Ok(ts) => ts,
            Err(err) => {
                log::error!("[clock] {}", err);
                panic!("{}", err)
            }
        }
    }

    /// milliseconds from `start` to `end`
    fn elapsed_ms(start: Timestamp<Self>, end: Timestamp<Self>) -> f64 {
        let secs = (end.secs - start.secs) as f64;
        let subsec = (end.subsec - start.subsec) as f64 * Self::RESOLUTION.scale();
        (secs + subsec) * 1.0e3
    }
}

mod monotonic;
mod wallclock;

pub use monotonic::Monotonic;
pub use wallclock::WallClock;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nanosecond_borrow_across_second() {
        let start = Timestamp::<Monotonic>::new(5, 900_000_000);
        let end = Timestamp::<Monotonic>::new(6, 100_000_000);
        let ms = Monotonic::elapsed_ms(start, end);
        assert!((ms - 200.0).abs() < 1e-9, "{}", ms);
    }

    #[test]
    fn microsecond_scale() {
        let start = Timestamp::<WallClock>::new(1_700_000_000, 250_000);
        let end = Timestamp::<WallClock>::new(1_700_000_000, 260_500);
        let ms = WallClock::elapsed_ms(start, end);
        assert!((ms - 10.5).abs() < 1e-6, "{}", ms);
    }

    #[test]
    fn end_before_start_is_negative() {
        let start = Timestamp::<Monotonic>::new(2, 0);
        let end = Timestamp::<Monotonic>::new(1, 500_000_000);
        assert!((Monotonic::elapsed_ms(start, end) + 500.0).abs() < 1e-9);
    }

    #[test]
    fn resolutions() {
        assert_eq!(Monotonic::RESOLUTION, Resolution::Nanos);
        assert_eq!(WallClock::RESOLUTION, Resolution::Micros);
        assert!((Resolution::Micros.as_millis_f64() - 1.0e-3).abs() < 1e-15);
    }

    #[test]
    fn clocks_read_in_range() {
        for _ in 0..1000 {
            let ts = Monotonic::try_read().unwrap();
            assert!((0..1_000_000_000).contains(&ts.subsec));
            let ts = WallClock::try_read().unwrap();
            assert!((0..1_000_000).contains(&ts.subsec));
        }
    }

    #[test]
    fn monotonic_never_goes_back() {
        let mut last = Monotonic::read();
        for _ in 0..10_000 {
            let now = Monotonic::read();
            assert!(Monotonic::elapsed_ms(last, now) >= 0.0);
            last = now;
        }
    }

    #[test]
    fn clock_error_message() {
        let err = ClockError::Read { clock: "CLOCK_MONOTONIC", status: -1 };
        assert_eq!(err.to_string(), "reading CLOCK_MONOTONIC failed with status -1");
    }
}
