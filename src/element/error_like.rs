//! Shape-based error classification.
//!
//! A value counts as an error when it carries a human-readable message and
//! a stack text, regardless of how it was produced. Classification never
//! fails; a value that does not conform is simply not an error.

use serde_json::Value;

/// Message plus stack text, the shape every error-like value reduces to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLike {
    /// One-line description, used as the line title when the error leads.
    pub message: String,
    /// Multi-line trace, re-indented below the line.
    pub stack: String,
}

impl ErrorLike {
    #[must_use]
    pub fn new(message: impl Into<String>, stack: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: stack.into(),
        }
    }

    /// Builds the shape from any standard error, rendering the source chain
    /// as the stack text with one `at` line per cause.
    #[must_use]
    pub fn from_error(err: &dyn std::error::Error) -> Self {
        let message = err.to_string();
        let mut stack = message.clone();
        let mut source = err.source();
        while let Some(cause) = source {
            stack.push_str("\n    at ");
            stack.push_str(&cause.to_string());
            source = cause.source();
        }
        Self { message, stack }
    }

    /// Structural check: an object with string `message` and `stack` fields
    /// conforms, whatever built it. Anything else is `None`.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        let message = map.get("message")?.as_str()?;
        let stack = map.get("stack")?.as_str()?;
        Some(Self::new(message, stack))
    }
}
