//! logging stuff
use {
    crate::{config::options::LoggingFormat, getopt},
    color_eyre::Result,
    tracing::{Level, debug, subscriber},
    tracing_subscriber::FmtSubscriber,
};

/// turn a level name into a tracing level, `None` meaning off
pub fn string_to_log_level(lvl: &str) -> Option<Level> {
    match lvl.to_lowercase().as_str() {
        "d" | "debug" | "dbg" => Some(Level::DEBUG),
        "t" | "trace" | "trc" => Some(Level::TRACE),
        "e" | "error" | "err" => Some(Level::ERROR),
        "i" | "info" | "inf" => Some(Level::INFO),
        "w" | "warn" | "wrn" => Some(Level::WARN),
        "off" | "none" => None,
        _ => Some(Level::ERROR),
    }
}

/// setup logging
///
/// # Errors
///
/// returns an error if a global subscriber is already installed
pub fn setup(verbose: u8) -> Result<()> {
    if !getopt!(logging.enable) {
        return Ok(());
    }

    let configured = string_to_log_level(&getopt!(logging.level));
    let max_level = match (verbose, configured) {
        (0, None) => return Ok(()),
        (0, Some(level)) => level,
        (1, _) => Level::INFO,
        (2, _) => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .with_ansi(getopt!(logging.ansi))
        .with_line_number(getopt!(logging.line_numbers))
        .with_target(getopt!(logging.event_targets));

    match getopt!(logging.format) {
        LoggingFormat::Pretty => {
            subscriber::set_global_default(subscriber.pretty().finish())?;
        }
        LoggingFormat::Compact => {
            subscriber::set_global_default(subscriber.compact().finish())?;
        }
    }

    debug!(level = %max_level, "logging setup successfully");
    Ok(())
}
