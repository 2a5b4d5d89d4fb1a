//! C-ABI triggers linked by the benchmark driver.
//!
//! One start slot is shared by the whole process: a driver runs one
//! measurement at a time from one thread. `start_trigger` and `stop_trigger`
//! are exported unmangled and never inlined, so the clock reads stay where
//! the driver placed the calls.

use spin::Mutex;

use crate::board::{self, BoardClock};
use crate::timer::{ClockHal, Timestamp};
use crate::trigger::Elapsed;

/// `None` while unarmed.
static START: Mutex<Option<Timestamp<BoardClock>>> = Mutex::new(None);

/// One-time setup before any measurement. Repeated calls are harmless.
#[unsafe(no_mangle)]
#[inline(never)]
pub extern "C" fn initialise_board() {
    board::init();
}

/// Arm the start slot, replacing any earlier start.
#[unsafe(no_mangle)]
#[inline(never)]
pub extern "C" fn start_trigger() {
    let mut start = START.lock();
    *start = Some(BoardClock::read());
}

/// Disarm and print the milliseconds since the last `start_trigger`.
#[unsafe(no_mangle)]
#[inline(never)]
pub extern "C" fn stop_trigger() {
    let end = BoardClock::read();
    stop_at(end).report();
}

/// Without a start the slot reads as the clock origin, like the zeroed
/// static of a C board file. The number is meaningless but still printed.
fn stop_at(end: Timestamp<BoardClock>) -> Elapsed {
    let start = START.lock().take().unwrap_or_else(|| {
        log::warn!("[trigger] stop_trigger without start_trigger");
        Timestamp::ZERO
    });
    Elapsed::between(start, end)
}
