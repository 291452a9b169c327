//! Clock segment rendering.

use chrono::{DateTime, Local, TimeZone, Timelike};
use linefmt::{render_timestamp, strip};

fn at(h: u32, m: u32, s: u32, ms: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2016, 8, 9, h, m, s)
        .unwrap()
        .with_nanosecond(ms * 1_000_000)
        .unwrap()
}

#[test]
fn renders_four_colon_separated_fields() {
    assert_eq!(strip(&render_timestamp(at(17, 34, 26, 0))), "17:34:26:000");
}

#[test]
fn pads_milliseconds_to_three_digits() {
    assert_eq!(strip(&render_timestamp(at(17, 34, 26, 1))), "17:34:26:001");
    assert_eq!(strip(&render_timestamp(at(17, 34, 26, 67))), "17:34:26:067");
    assert_eq!(strip(&render_timestamp(at(17, 34, 26, 999))), "17:34:26:999");
}

#[test]
fn pads_clock_fields_to_two_digits() {
    assert_eq!(strip(&render_timestamp(at(3, 4, 5, 67))), "03:04:05:067");
}

#[test]
fn width_is_constant() {
    for (h, m, s, ms) in [(0, 0, 0, 0), (23, 59, 59, 999), (9, 9, 9, 9)] {
        assert_eq!(strip(&render_timestamp(at(h, m, s, ms))).len(), 12);
    }
}

#[test]
fn clock_is_dim() {
    assert_eq!(
        render_timestamp(at(17, 34, 26, 0)),
        "\x1b[2m17:34:26:000\x1b[22m"
    );
}
