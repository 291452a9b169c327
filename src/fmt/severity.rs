//! Severity badge rendering for the line header.

use crate::level::Severity;

use super::color::{self, Color};

/// Uppercases the severity name and styles it: a red badge for `error`, a
/// yellow badge for `warn`, bold white for everything else.
///
/// Unrecognized names take the bold-white branch, so custom severities
/// still format instead of failing.
#[must_use]
pub fn severity_label(severity: &str) -> String {
    let label = severity.to_uppercase();
    match severity.parse::<Severity>() {
        Ok(Severity::Error) => color::paint_bg_bold(&label, Color::Red),
        Ok(Severity::Warn) => color::paint_bg_bold(&label, Color::Yellow),
        _ => color::paint_bold(&label, Color::White),
    }
}
