//! x86_64 host with no board attached.

use crate::timer::Monotonic;

pub const BOARD_NAME: &str = "x64/none";

pub type BoardClock = Monotonic;

pub(super) fn board_init() {}
