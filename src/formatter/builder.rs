//! Consuming builder for [`Formatter`].

use std::sync::Mutex;

use chrono::{DateTime, Local};

use super::{DEFAULT_INDENT, Formatter, TimestampMode};
use crate::fmt::color::{self, Color};
use crate::fmt::scope::ScopeColors;
use crate::fmt::value::{Inspector, ValueRenderer};

/// Collects formatting options; [`FormatterBuilder::build`] seals them into
/// a formatter.
pub struct FormatterBuilder {
    indent: Option<String>,
    timestamp: TimestampMode,
    root_folder: Option<String>,
    object_depth: usize,
    renderer: Box<dyn ValueRenderer>,
    scopes: ScopeColors,
}

impl Default for FormatterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatterBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            indent: None,
            timestamp: TimestampMode::Clock,
            root_folder: None,
            object_depth: 2,
            renderer: Box::new(Inspector::new()),
            scopes: ScopeColors::new(),
        }
    }

    /// Replaces the token spliced in for embedded line breaks. The default
    /// is a gray line break plus arrow gutter.
    #[must_use]
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = Some(indent.into());
        self
    }

    /// Turns the clock segment off or back on.
    #[must_use]
    pub fn timestamps(mut self, enabled: bool) -> Self {
        self.timestamp = if enabled {
            TimestampMode::Clock
        } else {
            TimestampMode::Off
        };
        self
    }

    /// Swaps in a caller-supplied clock renderer.
    #[must_use]
    pub fn timestamp_with(
        mut self,
        render: impl Fn(DateTime<Local>) -> String + Send + Sync + 'static,
    ) -> Self {
        self.timestamp = TimestampMode::Custom(Box::new(render));
        self
    }

    /// Project folder name used to shorten `file` paths in the location
    /// segment.
    #[must_use]
    pub fn root_folder(mut self, name: impl Into<String>) -> Self {
        self.root_folder = Some(name.into());
        self
    }

    /// Container nesting depth handed to the value renderer.
    #[must_use]
    pub const fn object_depth(mut self, depth: usize) -> Self {
        self.object_depth = depth;
        self
    }

    /// Swaps the deep-value renderer.
    #[must_use]
    pub fn value_renderer(mut self, renderer: impl ValueRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Starts from an existing scope color table instead of an empty one.
    #[must_use]
    pub fn scope_colors(mut self, scopes: ScopeColors) -> Self {
        self.scopes = scopes;
        self
    }

    #[must_use]
    pub fn build(self) -> Formatter {
        Formatter {
            indent: self
                .indent
                .unwrap_or_else(|| color::paint(DEFAULT_INDENT, Color::Gray)),
            timestamp: self.timestamp,
            root_folder: self.root_folder,
            object_depth: self.object_depth,
            renderer: self.renderer,
            scopes: Mutex::new(self.scopes),
        }
    }
}
