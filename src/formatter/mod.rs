//! Line assembly.
//!
//! One formatting call classifies its positional elements, consumes the
//! reserved metadata keys into the header, and splices every embedded line
//! break around the indent token. The formatter owns its scope color table
//! and a boxed value renderer; everything else is per-call input.

mod builder;

pub use builder::FormatterBuilder;

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Local};
use serde_json::Value;

use crate::element::{ErrorLike, LogElement, Metadata};
use crate::error::Error;
use crate::fmt::color::{self, Color};
use crate::fmt::path::truncate_path;
use crate::fmt::scope::ScopeColors;
use crate::fmt::severity::severity_label;
use crate::fmt::timestamp::render_timestamp;
use crate::fmt::value::ValueRenderer;

/// Title text standing in for an empty error message.
const NO_MESSAGE: &str = "[no message]";

/// Unstyled text of the default indent token.
const DEFAULT_INDENT: &str = "\n    →  ";

/// How the clock segment is produced.
enum TimestampMode {
    Clock,
    Off,
    Custom(Box<dyn Fn(DateTime<Local>) -> String + Send + Sync>),
}

/// Turns one accepted log record into a colorized line.
///
/// Scope colors accumulate behind a mutex, so a formatter shared across
/// threads hands out stable colors. Everything else about formatting is
/// pure input-to-output.
pub struct Formatter {
    indent: String,
    timestamp: TimestampMode,
    root_folder: Option<String>,
    object_depth: usize,
    renderer: Box<dyn ValueRenderer>,
    scopes: Mutex<ScopeColors>,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Formatter {
    /// Stock formatter: clock on, arrow-gutter indent, built-in renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Entry point for configured construction.
    #[must_use]
    pub fn builder() -> FormatterBuilder {
        FormatterBuilder::new()
    }

    /// Formats one record into a single string, colorized and possibly
    /// spanning several lines.
    ///
    /// `severity` may be any name; recognized ones pick up their badge
    /// styling. Reserved metadata keys holding usable values move into the
    /// header, and whatever remains of the map renders as one value block
    /// after the positional elements. Stacks from every error-like element
    /// come last, re-indented behind the indent token.
    ///
    /// # Errors
    ///
    /// Only a failing value renderer errors out; malformed input degrades
    /// to plainer output instead.
    pub fn format(
        &self,
        severity: &str,
        time: DateTime<Local>,
        elements: &[LogElement],
        metadata: &Metadata,
    ) -> Result<String, Error> {
        let mut line = String::from(" ");

        match &self.timestamp {
            TimestampMode::Clock => {
                line.push(' ');
                line.push_str(&render_timestamp(time));
            }
            TimestampMode::Custom(render) => {
                line.push(' ');
                line.push_str(&render(time));
            }
            TimestampMode::Off => {}
        }

        line.push(' ');
        line.push_str(&severity_label(severity));
        line.push(' ');

        let scope_used = match metadata.get("scope").and_then(Value::as_str) {
            Some(scope) if !scope.is_empty() => {
                let colored = self
                    .scopes
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .render(scope);
                line.push_str(&colored);
                line.push(' ');
                true
            }
            _ => false,
        };

        let mut location_used = false;
        let mut stacks: Vec<String> = Vec::new();

        for (index, element) in elements.iter().enumerate() {
            let element = classify(element);

            if index == 0 {
                let title_taken = match &element {
                    Element::Text(text) => {
                        line.push_str(&color::paint(text, Color::Blue));
                        true
                    }
                    Element::Error(err) => {
                        let message = if err.message.is_empty() {
                            NO_MESSAGE
                        } else {
                            &err.message
                        };
                        line.push_str(&color::paint(message, Color::Blue));
                        stacks.push(err.stack.clone());
                        true
                    }
                    Element::Value(_) => false,
                };

                location_used = self.push_location(&mut line, metadata);

                if title_taken {
                    continue;
                }
            }

            match element {
                Element::Error(err) => stacks.push(err.stack),
                Element::Text(text) => {
                    self.push_value_block(&mut line, &Value::String(text.to_string()))?;
                }
                Element::Value(value) => self.push_value_block(&mut line, value)?,
            }
        }

        let leftover: Metadata = metadata
            .iter()
            .filter(|(key, _)| !consumed(key, scope_used, location_used))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        if !leftover.is_empty() {
            self.push_value_block(&mut line, &Value::Object(leftover))?;
        }

        for stack in &stacks {
            line.push_str(&self.indent);
            line.push_str(&stack.replace('\n', &self.indent));
        }

        Ok(line)
    }

    /// Color assigned to `scope` by earlier calls, if any.
    #[must_use]
    pub fn scope_color(&self, scope: &str) -> Option<Color> {
        self.scopes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(scope)
    }

    /// Appends the dim ` (file:line)` segment when both halves are usable.
    fn push_location(&self, line: &mut String, metadata: &Metadata) -> bool {
        let (Some(file), Some(line_no)) = (usable(metadata, "file"), usable(metadata, "line"))
        else {
            return false;
        };
        let file = match file {
            Value::String(path) => truncate_path(path, self.root_folder.as_deref()).to_string(),
            other => scalar_text(other),
        };
        line.push_str(&color::dim(&format!(" ({file}:{})", scalar_text(line_no))));
        true
    }

    /// Renders one structured value and splices it in: the block gets a
    /// leading line break, then every break becomes the indent token.
    fn push_value_block(&self, line: &mut String, value: &Value) -> Result<(), Error> {
        let rendered = self.renderer.render(value, self.object_depth)?;
        let block = format!("\n{rendered}");
        line.push_str(&block.replace('\n', &self.indent));
        Ok(())
    }
}

/// Reserved keys move into the header only when their value is usable:
/// null, false, zero, and the empty string do not count.
fn usable<'a>(metadata: &'a Metadata, key: &str) -> Option<&'a Value> {
    metadata.get(key).filter(|value| is_usable(value))
}

fn is_usable(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Strings print bare inside the location segment; other scalars fall back
/// to their JSON text.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn consumed(key: &str, scope_used: bool, location_used: bool) -> bool {
    match key {
        "scope" => scope_used,
        "file" | "line" => location_used,
        _ => false,
    }
}

/// An element once shape is considered: values carrying the error shape
/// classify as errors no matter how they were built.
enum Element<'a> {
    Text(&'a str),
    Error(ErrorLike),
    Value(&'a Value),
}

fn classify(element: &LogElement) -> Element<'_> {
    match element {
        LogElement::Text(text) => Element::Text(text),
        LogElement::Error(err) => Element::Error(err.clone()),
        LogElement::Value(value) => match ErrorLike::from_value(value) {
            Some(err) => Element::Error(err),
            None => Element::Value(value),
        },
    }
}
