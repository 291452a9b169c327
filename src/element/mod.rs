//! Typed call-site arguments for one formatting call.

mod error_like;

pub use error_like::ErrorLike;

use serde_json::{Map, Value};

/// The trailing structured argument of every formatting call.
///
/// The reserved keys `scope`, `file`, and `line` feed the line header when
/// they hold usable values; whatever remains renders as one value block.
/// The map is alphabetical by key, so rendered output is deterministic.
pub type Metadata = Map<String, Value>;

/// One positional call-site argument.
///
/// Meaning is decided by position and shape: a leading `Text` becomes the
/// line title, error-like elements collect their stacks below the line, and
/// everything else goes through the value renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum LogElement {
    /// Plain text. In the first position it renders as the title.
    Text(String),
    /// An error carried together with its stack text.
    Error(ErrorLike),
    /// Arbitrary structured data.
    Value(Value),
}

impl From<&str> for LogElement {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for LogElement {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Value> for LogElement {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<ErrorLike> for LogElement {
    fn from(err: ErrorLike) -> Self {
        Self::Error(err)
    }
}
