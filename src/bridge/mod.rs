//! Wiring into the `log` facade.
//!
//! The host framework owns level filtering and dispatch; this adapter only
//! turns each accepted record into formatter input and writes the rendered
//! line. Warnings and errors go to stderr, everything else to stdout.

use chrono::Local;
use log::{LevelFilter, Log, Record, SetLoggerError};
use serde_json::Value;

use crate::element::{LogElement, Metadata};
use crate::formatter::Formatter;
use crate::level::Severity;

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warn,
            log::Level::Info => Self::Info,
            log::Level::Debug => Self::Debug,
            log::Level::Trace => Self::Trace,
        }
    }
}

/// Adapter that renders `log` records through a [`Formatter`].
///
/// The record's target becomes the scope, and the capture site's file and
/// line feed the location segment.
pub struct LogBridge {
    formatter: Formatter,
    filter: LevelFilter,
}

impl LogBridge {
    /// Wraps a formatter. Records below `Info` are dropped until a filter
    /// is set.
    #[must_use]
    pub fn new(formatter: Formatter) -> Self {
        Self {
            formatter,
            filter: LevelFilter::Info,
        }
    }

    /// Most verbose level the bridge lets through. Also becomes the global
    /// max level on install.
    #[must_use]
    pub const fn filter(mut self, filter: LevelFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Registers the bridge as the global logger and raises the global max
    /// level to its filter.
    ///
    /// # Errors
    /// Fails when another global logger is already installed; the max level
    /// is left alone in that case.
    pub fn install(self) -> Result<(), SetLoggerError> {
        let filter = self.filter;
        log::set_boxed_logger(Box::new(self)).map(|()| log::set_max_level(filter))
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.filter
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut metadata = Metadata::new();
        if !record.target().is_empty() {
            metadata.insert("scope".to_string(), Value::from(record.target()));
        }
        if let (Some(file), Some(line)) = (record.file(), record.line()) {
            metadata.insert("file".to_string(), Value::from(file));
            metadata.insert("line".to_string(), Value::from(line.to_string()));
        }

        let elements = [LogElement::Text(record.args().to_string())];
        let severity = Severity::from(record.level());

        let Ok(line) = self
            .formatter
            .format(severity.as_str(), Local::now(), &elements, &metadata)
        else {
            return;
        };

        if record.level() <= log::Level::Warn {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }

    fn flush(&self) {}
}
