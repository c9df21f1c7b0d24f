/*!
A bare-bones stderr logger for the `log` crate.
*/

use log::{Log, Metadata, Record};

/// A logger that writes every record to stderr.
///
/// No filtering happens here; the `log` crate's global max level decides
/// what gets through. That keeps this type stateless, so a single static
/// instance can back the whole process.
#[derive(Debug)]
pub(crate) struct Logger(());

const LOGGER: &Logger = &Logger(());

impl Logger {
    /// Installs this logger as the global one.
    pub(crate) fn init() -> Result<(), log::SetLoggerError> {
        log::set_logger(LOGGER)
    }
}

impl Log for Logger {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        // Filtering is handled by log::set_max_level.
        true
    }

    fn log(&self, record: &Record<'_>) {
        eprintln!(
            "{}|{}: {}",
            record.level(),
            record.target(),
            record.args(),
        );
    }

    fn flush(&self) {}
}
