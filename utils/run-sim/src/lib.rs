//! Host side of a simulated board run: the emulator command line for a
//! benchmark and the decoding of what the benchmark printed.

pub mod decode;
pub mod target;

pub use decode::{decode_results, is_canonical, parse_elapsed, DecodeError};
pub use target::{build_benchmark_cmd, get_target_args, TargetArgs, DEFAULT_VERI_ARGS};
