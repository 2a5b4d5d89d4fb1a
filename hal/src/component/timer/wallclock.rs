//! `gettimeofday` implementation for timer HAL

use core::mem::MaybeUninit;

use super::{ClockError, ClockHal, Resolution, Timestamp};

/// Wall clock for targets without a usable monotonic clock.
///
/// Can jump if the system time is set during a measurement.
pub struct WallClock;

impl ClockHal for WallClock {
    const RESOLUTION: Resolution = Resolution::Micros;
    const NAME: &'static str = "gettimeofday";

    #[inline(always)]
    fn try_read() -> Result<Timestamp<Self>, ClockError> {
        let mut tv = MaybeUninit::<libc::timeval>::uninit();
        let status = unsafe { libc::gettimeofday(tv.as_mut_ptr(), core::ptr::null_mut()) };
        if status != 0 {
            return Err(ClockError::Read { clock: Self::NAME, status });
        }
        let tv = unsafe { tv.assume_init() };
        Ok(Timestamp::new(tv.tv_sec as i64, tv.tv_usec as i64))
    }
}
