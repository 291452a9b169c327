#![forbid(unsafe_code)]

//! `linefmt` - Colorized console formatting for log records.
//!
//! Turns one already-accepted log event into a single colorized, possibly
//! multi-line string:
//! - Title, error, and data classification of positional arguments
//! - Stable per-scope display colors drawn from a fixed palette
//! - Fixed-width clock rendering and project-relative path shortening
//! - Structured values and error stacks re-indented behind an arrow gutter
//!
//! Level filtering and dispatch stay with the host logging framework;
//! formatting is the only concern here.
//!
//! # Example
//!
//! ```
//! use chrono::Local;
//! use linefmt::{Formatter, LogElement, Metadata};
//! use serde_json::Value;
//!
//! let formatter = Formatter::builder().root_folder("myapp").build();
//!
//! let mut metadata = Metadata::new();
//! metadata.insert("scope".to_string(), Value::from("net"));
//!
//! let line = formatter
//!     .format(
//!         "info",
//!         Local::now(),
//!         &[LogElement::Text("connection established".to_string())],
//!         &metadata,
//!     )
//!     .unwrap();
//! assert!(linefmt::strip(&line).contains("INFO net connection established"));
//! ```
//!
//! # Features
//!
//! - `log`: adapter implementing [`log::Log`] around a formatter
//! - `cli` (default): the one-shot `linefmt` binary

// Core modules (always available)
pub mod config;
pub mod element;
pub mod error;
pub mod fmt;
pub mod formatter;
pub mod level;

// Log-facade adapter (feature-gated)
#[cfg(feature = "log")]
pub mod bridge;

// Re-exports for convenience
pub use config::FormatConfig;
pub use element::{ErrorLike, LogElement, Metadata};
pub use error::Error;
pub use fmt::color::{Color, strip};
pub use fmt::path::truncate_path;
pub use fmt::scope::ScopeColors;
pub use fmt::timestamp::render_timestamp;
pub use fmt::value::{Inspector, ValueRenderer};
pub use formatter::{Formatter, FormatterBuilder};
pub use level::Severity;

// Bridge re-exports
#[cfg(feature = "log")]
pub use bridge::LogBridge;
