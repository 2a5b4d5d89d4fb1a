#[macro_export]
/// println string macro
///
/// A line that fits the console line buffer reaches stdout in one `write`.
macro_rules! println {
    () => {
        $crate::console::_print(format_args!("\n"));
    };
    ($fmt: literal $(, $($arg: tt)+)?) => {
        $crate::console::_print(format_args!(concat!($fmt, "\n") $(, $($arg)+)?));
    }
}

mod hosted;

use hosted::Fd;
use spin::Mutex;

use crate::util::FmtBuf;

static CONSOLE: Mutex<()> = Mutex::new(());

const LINE_CAP: usize = 128;

fn with_console<R>(f: impl FnOnce() -> R) -> R {
    let _guard = CONSOLE.lock();
    f()
}

/// `args` rendered into the line buffer, or `None` if it does not fit.
fn buffer_line(args: core::fmt::Arguments) -> Option<FmtBuf<LINE_CAP>> {
    let mut line = FmtBuf::new();
    core::fmt::Write::write_fmt(&mut line, args).ok()?;
    Some(line)
}

pub fn _print(args: core::fmt::Arguments) {
    let line = buffer_line(args);
    with_console(|| {
        let mut out = Fd::stdout();
        let _ = match &line {
            Some(line) => out.write_all(line.as_bytes()),
            None => core::fmt::Write::write_fmt(&mut out, args).map_err(|_| ()),
        };
    });
}

pub fn _eprint(args: core::fmt::Arguments) {
    with_console(|| {
        let _ = core::fmt::Write::write_fmt(&mut Fd::stderr(), args);
    });
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }
    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let color = match record.level() {
            log::Level::Error => 31, // Red
            log::Level::Warn => 93,  // BrightYellow
            log::Level::Info => 34,  // Blue
            log::Level::Debug => 32, // Green
            log::Level::Trace => 90, // BrightBlack
        };
        _eprint(format_args!(
            "\u{1B}[{}m[{:>5}] {}\u{1B}[0m\n",
            color,
            record.level(),
            record.args(),
        ));
    }
    fn flush(&self) {}
}

/// Level baked in from `LOG` at build time.
pub fn level_filter() -> log::LevelFilter {
    match option_env!("LOG") {
        Some("ERROR") => log::LevelFilter::Error,
        Some("WARN") => log::LevelFilter::Warn,
        Some("INFO") => log::LevelFilter::Info,
        Some("DEBUG") => log::LevelFilter::Debug,
        Some("TRACE") => log::LevelFilter::Trace,
        Some("OFF") => log::LevelFilter::Off,
        _ => log::LevelFilter::Warn,
    }
}

static INIT: spin::Once<()> = spin::Once::new();

/// Install the console logger. Later calls do nothing.
///
/// If the driver installed its own logger first, that one is kept.
pub fn init() {
    INIT.call_once(|| {
        static LOGGER: Logger = Logger;
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level_filter());
        }
    });
}
