//! Fixed-width clock rendering for the line header.

use chrono::{DateTime, Local, Timelike};

use super::color;

/// Renders the wall-clock time as dim `HH:MM:SS:mmm`, each field zero-padded.
///
/// The width never varies, so stacked log lines keep their columns aligned.
#[must_use]
pub fn render_timestamp(time: DateTime<Local>) -> String {
    let clock = format!(
        "{:02}:{:02}:{:02}:{:03}",
        time.hour(),
        time.minute(),
        time.second(),
        time.timestamp_subsec_millis()
    );
    color::dim(&clock)
}
