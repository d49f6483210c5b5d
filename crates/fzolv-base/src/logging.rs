use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;

/// Writes each record to stdout as `[LEVEL] [thread:ID] file:line - message`.
pub struct StdoutLogger;

pub(crate) static STDOUT_LOGGER: StdoutLogger = StdoutLogger;

pub(crate) fn format_record(record: &Record) -> String {
    format!(
        "[{}] [thread:{:?}] {}:{} - {}",
        record.level(),
        std::thread::current().id(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.args()
    )
}

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{}", format_record(record));
        }
    }

    fn flush(&self) {
        std::io::stdout().flush().ok();
    }
}

/// Debug in debug builds, Info in release builds.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

pub(crate) fn install(level: LevelFilter) {
    // only the first install of the process wins
    if log::set_logger(&STDOUT_LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Install the [`StdoutLogger`] at [`default_level`]. Only the first call per process has an effect.
pub fn init_stdout_logger() {
    install(default_level());
}

/// Log at error level (the log crate has no fatal level), flush stdout and exit with status 1.
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => {{
        $crate::log::error!($($arg)*);
        $crate::log::Log::flush($crate::log::logger());
        std::process::exit(1);
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record_layout() {
        let record = log::RecordBuilder::new()
            .level(log::Level::Warn)
            .target("test")
            .file(Some("vec2.rs"))
            .line(Some(76))
            .args(format_args!("zero-length normalize"))
            .build();

        let line = format_record(&record);
        assert!(line.starts_with("[WARN] [thread:ThreadId("), "{line}");
        assert!(line.ends_with("] vec2.rs:76 - zero-length normalize"), "{line}");
    }

    #[test]
    fn test_format_record_missing_location() {
        let record = log::RecordBuilder::new()
            .level(log::Level::Info)
            .args(format_args!("no location"))
            .build();

        assert!(format_record(&record).ends_with(" unknown:0 - no location"));
    }
}
