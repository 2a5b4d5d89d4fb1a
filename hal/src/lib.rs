#![cfg_attr(not(test), no_std)]

//! Board support for timing benchmark runs on hosted targets.
//!
//! The C-ABI triggers in [`ffi`] are what a benchmark driver links against;
//! [`trigger::Trigger`] is the same measurement without process-wide state.

mod component;

pub use component::*;

pub mod board;
pub mod ffi;
pub mod trigger;
pub mod util;

pub use ffi::{initialise_board, start_trigger, stop_trigger};
pub use trigger::{Elapsed, Trigger, TriggerGuard};
