use gloo_console::{debug, error, info, trace, warn};
use log::{set_logger, set_max_level, Level, LevelFilter, Log, Metadata, Record};

/// Installs the console logger and sets the max level to `level`.
///
/// Only the first call installs the logger; later calls only change the max level.
#[inline]
pub fn init(level: LevelFilter) {
    let _ = set_logger(&Logger);
    set_max_level(level);
}

/// A [`Log`] implementation writing to the browser console.
#[derive(Copy, Clone, Debug)]
pub struct Logger;

impl Log for Logger {
    #[inline]
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    #[inline]
    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = format!("[{}] {}", record.target(), record.args());

        match record.level() {
            Level::Error => error!(message),
            Level::Warn => warn!(message),
            Level::Info => info!(message),
            Level::Debug => debug!(message),
            Level::Trace => trace!(message),
        }
    }

    #[inline]
    fn flush(&self) {}
}
