//! `log` backend that prints through the progress display

use indicatif::MultiProgress;
use log::{LevelFilter, Log, Metadata, Record};

/// Writes log records to stderr without tearing active progress bars
pub struct ProgressLogger {
    level: LevelFilter,
    multi_progress: Option<MultiProgress>,
}

impl ProgressLogger {
    /// Create a logger for `level`, routed through `multi_progress` when present
    pub const fn new(level: LevelFilter, multi_progress: Option<MultiProgress>) -> Self {
        Self {
            level,
            multi_progress,
        }
    }

    /// Install as the global logger
    ///
    /// Later calls keep the first installed logger and only adjust the level.
    pub fn install(level: LevelFilter, multi_progress: Option<MultiProgress>) {
        let _ = log::set_boxed_logger(Box::new(Self::new(level, multi_progress)));
        log::set_max_level(level);
    }

    /// Render a record as a single line
    pub fn format_record(record: &Record<'_>) -> String {
        format!(
            "[{:<5} {}] {}",
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for ProgressLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    // Allow print for the fallback path when no progress display is active
    #[allow(clippy::print_stderr)]
    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = Self::format_record(record);
        let printed = self
            .multi_progress
            .as_ref()
            .filter(|mp| !mp.is_hidden())
            .is_some_and(|mp| mp.println(&line).is_ok());
        if !printed {
            eprintln!("{line}");
        }
    }

    fn flush(&self) {}
}
