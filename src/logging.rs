//! `env_logger` setup for the `log` facade

use log::{Level, LevelFilter};
use std::io::Write;

fn label(level: Level) -> &'static str {
    match level {
        Level::Error => "Error",
        Level::Warn => "Warning",
        Level::Info => "Info",
        Level::Debug | Level::Trace => "Debug",
    }
}

/// Install the logger; warnings by default, debug output when verbose
///
/// `RUST_LOG` still overrides the level chosen here.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    // A logger may already be installed; keep whichever came first.
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format(|buf, record| writeln!(buf, "{}: {}", label(record.level()), record.args()))
        .try_init();
}
