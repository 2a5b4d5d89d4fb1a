//! Rocket core Verilator model, running benchmarks under the proxy kernel.
//!
//! pk forwards `gettimeofday` to the host, which is the only clock it offers.

use crate::timer::WallClock;

pub const BOARD_NAME: &str = "riscv64/rocketverilator";

pub type BoardClock = WallClock;

pub(super) fn board_init() {}
