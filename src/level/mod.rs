//! Severity names that decide how a record's badge is styled.

use std::fmt;
use std::str::FromStr;

/// The severities with styling of their own.
///
/// Formatting accepts any severity string; names outside this set render
/// uppercased with the default styling. Parsing is exact because styling
/// keys off the lowercase name: `"WARN"` and `"warning"` are not [`Severity::Warn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// High-volume instrumentation that would be too noisy outside of development.
    Trace,
    /// Startup, teardown, and state-change details useful for diagnosing issues.
    Debug,
    /// Normal operational milestones.
    #[default]
    Info,
    /// Non-fatal anomalies, shown on a yellow badge.
    Warn,
    /// Failures, shown on a red badge.
    Error,
    /// Plain output with no severity weight of its own.
    Log,
}

impl Severity {
    /// Lowercase name, the form formatting and parsing key off.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Log => "log",
        }
    }

    /// Convenience for iteration in demo output and tests.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Trace,
            Self::Debug,
            Self::Info,
            Self::Warn,
            Self::Error,
            Self::Log,
        ]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown severity" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity: '{}'", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "log" => Ok(Self::Log),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}
