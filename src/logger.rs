//! Prefixed, coloured log lines on stderr.
//!
//! ```ignore
//! log!("check"; "checking {} links", count);
//! debug!("config"; "loaded {}", path.display());
//! ```
//!
//! stdout is left alone so `quire head` and `quire dump` can be piped.

use owo_colors::OwoColorize;
use std::{
    io::{Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

/// Set from `--verbose`; gates `debug!`.
static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// `log!("module"; "format {}", args)` prints `[module] format ...`.
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Like `log!`, but only with `--verbose`.
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Write one line. Prefer the macros.
pub fn log(module: &str, message: &str) {
    let line = format!("{} {message}", prefix(module));
    let mut err = stderr().lock();
    writeln!(err, "{line}").ok();
    err.flush().ok();
}

/// `[module]`, coloured by kind: check green, error red, warning magenta,
/// hint cyan, anything else yellow.
fn prefix(module: &str) -> String {
    let tag = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "check" => tag.bright_green().bold().to_string(),
        "error" => tag.bright_red().bold().to_string(),
        "warning" => tag.bright_magenta().bold().to_string(),
        "hint" => tag.bright_cyan().bold().to_string(),
        _ => tag.bright_yellow().bold().to_string(),
    }
}
