// ============================================================================
// clipkit-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger setup for the clipkit binaries
//
// Library code logs through the `log` facade. Each binary calls `init` once
// after parsing its arguments:
// - default level: info (batch progress, fallbacks the probe forced)
// - -v/--verbose: debug (argument lists, probe results)
// - RUST_LOG, when set, takes precedence over both

use log::LevelFilter;
use owo_colors::OwoColorize;
use std::io::Write;

use crate::output::should_use_color;

/// Initializes the global logger.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let use_color = should_use_color();
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(move |buf, record| {
            let label = match record.level() {
                log::Level::Error => "ERROR",
                log::Level::Warn => "WARN ",
                log::Level::Info => "INFO ",
                log::Level::Debug => "DEBUG",
                log::Level::Trace => "TRACE",
            };

            if !use_color {
                return writeln!(buf, "{} {}", label, record.args());
            }

            match record.level() {
                log::Level::Error => writeln!(buf, "{} {}", label.bright_red(), record.args()),
                log::Level::Warn => writeln!(buf, "{} {}", label.yellow(), record.args()),
                log::Level::Info => writeln!(buf, "{} {}", label.green(), record.args()),
                log::Level::Debug => writeln!(buf, "{} {}", label.blue(), record.args()),
                log::Level::Trace => writeln!(buf, "{} {}", label.magenta(), record.args()),
            }
        })
        .init();

    log::debug!("Logger initialized with level: {}", level);
}
