pub mod console;
pub mod timer;
