//! Stable display colors for scope labels.

use std::collections::HashMap;

use super::color::{self, Color};

/// Rotation order for newly seen scopes.
///
/// Black is left out; it would vanish on dark terminals.
pub const SCOPE_PALETTE: [Color; 8] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
    Color::Gray,
];

/// Label-to-color assignments for the lifetime of one formatter.
///
/// The first sighting of a label takes the next palette color, wrapping
/// around once all eight are in use. An assignment never changes and is
/// never evicted, so a scope keeps one color for as long as the table
/// lives. A fresh table starts the rotation over.
#[derive(Debug, Clone, Default)]
pub struct ScopeColors {
    assigned: HashMap<String, Color>,
    cursor: usize,
}

impl ScopeColors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the label's color, assigning the next palette slot on first
    /// sight.
    pub fn color_for(&mut self, scope: &str) -> Color {
        if let Some(color) = self.assigned.get(scope) {
            return *color;
        }
        let color = SCOPE_PALETTE[self.cursor % SCOPE_PALETTE.len()];
        self.cursor += 1;
        self.assigned.insert(scope.to_string(), color);
        color
    }

    /// Color already assigned to `scope`, if any. Never assigns.
    #[must_use]
    pub fn get(&self, scope: &str) -> Option<Color> {
        self.assigned.get(scope).copied()
    }

    /// Number of labels assigned so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    /// Renders `scope` bold in its assigned color.
    pub fn render(&mut self, scope: &str) -> String {
        let color = self.color_for(scope);
        color::paint_bold(scope, color)
    }
}
