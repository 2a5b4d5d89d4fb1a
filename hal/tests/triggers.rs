//! Drives the exported triggers through their C symbols, the way a driver
//! compiled separately links them.

use std::time::Duration;

use embench_hal::board::{BoardClock, BOARD_NAME};
use embench_hal::timer::ClockHal;
use embench_hal::Trigger;

unsafe extern "C" {
    fn initialise_board();
    fn start_trigger();
    fn stop_trigger();
}

#[test]
fn linked_symbols_cycle() {
    assert!(!BOARD_NAME.is_empty());
    unsafe {
        initialise_board();
        initialise_board();
        for _ in 0..3 {
            start_trigger();
            std::thread::sleep(Duration::from_millis(1));
            stop_trigger();
        }
        // the second start wins
        start_trigger();
        start_trigger();
        stop_trigger();
        initialise_board();
    }

    // board clock still times correctly after the extra setup calls
    let trigger = Trigger::<BoardClock>::start();
    std::thread::sleep(Duration::from_millis(5));
    let ms = trigger.measure().as_millis_f64();
    assert!(ms >= 5.0 - BoardClock::RESOLUTION.as_millis_f64(), "{}", ms);
    assert!(ms < 5.0 + 500.0, "{}", ms);
}

#[test]
fn board_clock_spin() {
    let trigger = Trigger::<BoardClock>::start();
    while trigger.elapsed().as_millis_f64() < 10.0 {
        std::hint::spin_loop();
    }
    let ms = trigger.measure().as_millis_f64();
    assert!(ms >= 10.0, "{}", ms);
    assert!(ms < 10.0 + 500.0, "{}", ms);
    assert!(BoardClock::RESOLUTION.as_millis_f64() <= 1.0e-3);
}
