//! `clock_gettime(CLOCK_MONOTONIC)` implementation for timer HAL

use core::mem::MaybeUninit;

use super::{ClockError, ClockHal, Resolution, Timestamp};

pub struct Monotonic;

impl ClockHal for Monotonic {
    const RESOLUTION: Resolution = Resolution::Nanos;
    const NAME: &'static str = "CLOCK_MONOTONIC";

    #[inline(always)]
    fn try_read() -> Result<Timestamp<Self>, ClockError> {
        let mut ts = MaybeUninit::<libc::timespec>::uninit();
        let status = unsafe { libc::clock_gettime(libc::CLOCK_MONOTONIC, ts.as_mut_ptr()) };
        if status != 0 {
            return Err(ClockError::Read { clock: Self::NAME, status });
        }
        let ts = unsafe { ts.assume_init() };
        Ok(Timestamp::new(ts.tv_sec as i64, ts.tv_nsec as i64))
    }
}
