//! The classic 16-color console palette with paired open/close escapes.
//!
//! Each styling helper closes only the attribute it opened (`39` for
//! foreground, `49` for background, `22` for weight) instead of issuing a
//! full reset, so styled fragments can sit inside other styled text.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// A named console color.
///
/// `Gray` is the bright-black slot (`90`); every other name maps to the
/// standard 30-37 foreground range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
}

impl Color {
    /// Restores the default foreground without touching other attributes.
    pub const FG_CLOSE: &'static str = "\x1b[39m";

    /// Restores the default background without touching other attributes.
    pub const BG_CLOSE: &'static str = "\x1b[49m";

    /// Opening escape for foreground text in this color.
    #[must_use]
    pub const fn fg_open(self) -> &'static str {
        match self {
            Self::Black => "\x1b[30m",
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",
            Self::Gray => "\x1b[90m",
        }
    }

    /// Opening escape for a background in this color.
    #[must_use]
    pub const fn bg_open(self) -> &'static str {
        match self {
            Self::Black => "\x1b[40m",
            Self::Red => "\x1b[41m",
            Self::Green => "\x1b[42m",
            Self::Yellow => "\x1b[43m",
            Self::Blue => "\x1b[44m",
            Self::Magenta => "\x1b[45m",
            Self::Cyan => "\x1b[46m",
            Self::White => "\x1b[47m",
            Self::Gray => "\x1b[100m",
        }
    }

    /// Lowercase color name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::Gray => "gray",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const BOLD_OPEN: &str = "\x1b[1m";
const DIM_OPEN: &str = "\x1b[2m";
/// Bold and dim share one close code.
const WEIGHT_CLOSE: &str = "\x1b[22m";

/// Renders `text` in the given foreground color.
#[must_use]
pub fn paint(text: &str, color: Color) -> String {
    format!("{}{text}{}", color.fg_open(), Color::FG_CLOSE)
}

/// Bold text in the given foreground color.
#[must_use]
pub fn paint_bold(text: &str, color: Color) -> String {
    format!(
        "{}{BOLD_OPEN}{text}{WEIGHT_CLOSE}{}",
        color.fg_open(),
        Color::FG_CLOSE
    )
}

/// Bold text on a colored background, foreground left at the terminal default.
#[must_use]
pub fn paint_bg_bold(text: &str, color: Color) -> String {
    format!(
        "{}{BOLD_OPEN}{text}{WEIGHT_CLOSE}{}",
        color.bg_open(),
        Color::BG_CLOSE
    )
}

/// Bold text with no color change.
#[must_use]
pub fn bold(text: &str) -> String {
    format!("{BOLD_OPEN}{text}{WEIGHT_CLOSE}")
}

/// Dim secondary text.
#[must_use]
pub fn dim(text: &str) -> String {
    format!("{DIM_OPEN}{text}{WEIGHT_CLOSE}")
}

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("valid ANSI escape pattern"));

/// Removes every ANSI styling escape from `text`.
///
/// Tests compare stripped output, and the value renderer measures visible
/// width with it.
#[must_use]
pub fn strip(text: &str) -> String {
    ANSI_ESCAPE.replace_all(text, "").into_owned()
}

/// Character count of `text` once escapes are removed.
#[must_use]
pub fn visible_width(text: &str) -> usize {
    strip(text).chars().count()
}
