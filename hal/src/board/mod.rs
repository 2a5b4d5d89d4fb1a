//! Board table, selected at build time.
//!
//! Each board names the clock it times with and its setup hook.

#[cfg(not(feature = "rocketverilator"))]
mod none;

#[cfg(not(feature = "rocketverilator"))]
pub use none::*;

#[cfg(feature = "rocketverilator")]
mod rocketverilator;

#[cfg(feature = "rocketverilator")]
pub use rocketverilator::*;

use crate::timer::ClockHal;

/// Console logger plus the board's own setup. Safe to call more than once.
pub fn init() {
    crate::console::init();
    board_init();
    log::debug!(
        "[board] {} ready, timing with {} ({} ms ticks)",
        BOARD_NAME,
        <BoardClock as ClockHal>::NAME,
        <BoardClock as ClockHal>::RESOLUTION.as_millis_f64()
    );
}
