//! Emulator invocation for boards that run benchmarks in a simulator, such
//! as the rocketverilator model under the proxy kernel.

use std::ffi::OsString;
use std::io;
use std::path::{Component, Path, PathBuf};

use clap::Parser;

/// Verilator arguments used when none are given: run under `pk`.
pub const DEFAULT_VERI_ARGS: &str = "-c pk";

/// Target specific arguments left over after the generic ones.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "run-sim", about = "Get target specific args")]
pub struct TargetArgs {
    /// emulator
    #[arg(long)]
    pub emulator: PathBuf,

    /// Args to pass the verilator emulator
    #[arg(long = "veri_args", default_value = DEFAULT_VERI_ARGS, allow_hyphen_values = true)]
    pub veri_args: String,
}

impl TargetArgs {
    pub fn new(emulator: impl Into<PathBuf>) -> Self {
        Self {
            emulator: emulator.into(),
            veri_args: DEFAULT_VERI_ARGS.to_string(),
        }
    }
}

/// Parse the arguments the generic runner did not consume.
pub fn get_target_args<I, T>(remnant: I) -> Result<TargetArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv = std::iter::once(OsString::from("run-sim")).chain(remnant.into_iter().map(Into::into));
    TargetArgs::try_parse_from(argv)
}

/// `[emulator] + veri_args + [bench]`, with the emulator made absolute.
///
/// `veri_args` is split on single spaces, so doubled spaces yield empty
/// arguments.
pub fn build_benchmark_cmd(bench: &str, args: &TargetArgs) -> io::Result<Vec<String>> {
    let emulator = absolute(&args.emulator)?;
    let mut cmd = Vec::with_capacity(2);
    cmd.push(emulator.to_string_lossy().into_owned());
    cmd.extend(args.veri_args.split(' ').map(str::to_string));
    cmd.push(bench.to_string());
    log::debug!("[run-sim] {}", cmd.join(" "));
    Ok(cmd)
}

/// Absolute, lexically normalised path; symlinks are left alone.
fn absolute(path: &Path) -> io::Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    Ok(out)
}
