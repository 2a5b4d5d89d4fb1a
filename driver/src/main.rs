//! Minimal benchmark driver: times a busy wait between the board triggers.
//!
//! Usage: `embench-driver [SPIN_MS]`, default 10 ms.

use embench_hal::board::BoardClock;
use embench_hal::{initialise_board, start_trigger, stop_trigger, Trigger};

const DEFAULT_SPIN_MS: f64 = 10.0;

/// Burn CPU until `ms` have passed on the board clock.
#[inline(never)]
fn spin_for(ms: f64) {
    let spin = Trigger::<BoardClock>::start();
    while spin.elapsed().as_millis_f64() < ms {
        std::hint::spin_loop();
    }
}

fn main() {
    let spin_ms = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<f64>() {
            Ok(ms) if ms >= 0.0 => ms,
            _ => {
                eprintln!("usage: embench-driver [SPIN_MS]");
                std::process::exit(2);
            }
        },
        None => DEFAULT_SPIN_MS,
    };

    initialise_board();
    log::info!("[driver] spinning for {} ms", spin_ms);

    start_trigger();
    spin_for(spin_ms);
    stop_trigger();
}
