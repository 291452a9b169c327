//! Deep-value rendering behind a swappable seam.
//!
//! The line assembler never looks inside a rendered block; it re-indents
//! whatever text comes back. [`Inspector`] is the built-in renderer for
//! `serde_json::Value` trees.

use serde_json::Value;

use crate::error::Error;

use super::color::{self, Color};

/// Turns one structured value into a block of text, possibly spanning
/// several lines.
///
/// `depth` is how many container levels below the top are expanded before
/// placeholders stand in for the rest.
pub trait ValueRenderer: Send + Sync {
    /// # Errors
    ///
    /// Implementation-defined. The built-in [`Inspector`] never fails.
    fn render(&self, value: &Value, depth: usize) -> Result<String, Error>;
}

/// Console-style value printer: single-quoted green strings, yellow
/// scalars, `{ key: value }` and `[ item ]` notation.
///
/// A container stays on one line while it fits the line budget; past that
/// it breaks into a hung block with a two-space continuation indent. The
/// top level always expands; containers nested deeper than the requested
/// depth collapse to `[Object]` or `[Array]`, except empty ones, which
/// render their brackets at any depth.
#[derive(Debug, Clone)]
pub struct Inspector {
    line_budget: usize,
    max_items: usize,
}

impl Default for Inspector {
    fn default() -> Self {
        Self {
            line_budget: 60,
            max_items: 100,
        }
    }
}

impl Inspector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Containers wider than this many visible characters go multi-line.
    #[must_use]
    pub const fn line_budget(mut self, budget: usize) -> Self {
        self.line_budget = budget;
        self
    }

    /// Arrays truncate past this many rendered items.
    #[must_use]
    pub const fn max_items(mut self, max: usize) -> Self {
        self.max_items = max;
        self
    }

    fn fmt_value(&self, value: &Value, depth: usize, level: usize) -> String {
        match value {
            Value::Null => color::bold("null"),
            Value::Bool(b) => color::paint(&b.to_string(), Color::Yellow),
            Value::Number(n) => color::paint(&n.to_string(), Color::Yellow),
            Value::String(s) => color::paint(&quote(s), Color::Green),
            Value::Array(items) => {
                if items.is_empty() {
                    return "[]".to_string();
                }
                if level > depth {
                    return color::paint("[Array]", Color::Cyan);
                }
                let mut entries: Vec<String> = items
                    .iter()
                    .take(self.max_items)
                    .map(|item| self.fmt_value(item, depth, level + 1))
                    .collect();
                if items.len() > self.max_items {
                    let rest = items.len() - self.max_items;
                    let noun = if rest == 1 { "item" } else { "items" };
                    entries.push(format!("... {rest} more {noun}"));
                }
                self.join(&entries, '[', ']')
            }
            Value::Object(map) => {
                if map.is_empty() {
                    return "{}".to_string();
                }
                if level > depth {
                    return color::paint("[Object]", Color::Cyan);
                }
                let entries: Vec<String> = map
                    .iter()
                    .map(|(key, item)| {
                        format!("{}: {}", quote_key(key), self.fmt_value(item, depth, level + 1))
                    })
                    .collect();
                self.join(&entries, '{', '}')
            }
        }
    }

    /// One line when everything fits; otherwise a hung block where each
    /// entry continues two spaces in from the opening bracket.
    fn join(&self, entries: &[String], open: char, close: char) -> String {
        let single = format!("{open} {} {close}", entries.join(", "));
        if !single.contains('\n') && color::visible_width(&single) <= self.line_budget {
            return single;
        }
        let hung: Vec<String> = entries.iter().map(|e| e.replace('\n', "\n  ")).collect();
        format!("{open} {} {close}", hung.join(",\n  "))
    }
}

impl ValueRenderer for Inspector {
    fn render(&self, value: &Value, depth: usize) -> Result<String, Error> {
        Ok(self.fmt_value(value, depth, 0))
    }
}

/// Single-quotes a string, escaping quotes, backslashes, and control
/// breaks. Escaping the breaks keeps raw string data from injecting line
/// structure into the block.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('\'');
    out
}

/// Identifier-shaped keys print bare; anything else gets quoted like a
/// string value.
fn quote_key(key: &str) -> String {
    let mut chars = key.chars();
    let bare = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    };
    if bare { key.to_string() } else { quote(key) }
}
