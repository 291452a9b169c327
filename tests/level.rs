//! Tests for severity parsing and display.

use linefmt::Severity;

#[test]
fn severity_display() {
    assert_eq!(Severity::Trace.to_string(), "trace");
    assert_eq!(Severity::Debug.to_string(), "debug");
    assert_eq!(Severity::Info.to_string(), "info");
    assert_eq!(Severity::Warn.to_string(), "warn");
    assert_eq!(Severity::Error.to_string(), "error");
    assert_eq!(Severity::Log.to_string(), "log");
}

#[test]
fn severity_from_str() {
    assert_eq!("trace".parse::<Severity>().unwrap(), Severity::Trace);
    assert_eq!("debug".parse::<Severity>().unwrap(), Severity::Debug);
    assert_eq!("info".parse::<Severity>().unwrap(), Severity::Info);
    assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warn);
    assert_eq!("error".parse::<Severity>().unwrap(), Severity::Error);
    assert_eq!("log".parse::<Severity>().unwrap(), Severity::Log);
}

#[test]
fn severity_parse_is_exact() {
    // Styling keys off the exact lowercase name, so no case folding or aliases
    assert!("WARN".parse::<Severity>().is_err());
    assert!("Warn".parse::<Severity>().is_err());
    assert!("warning".parse::<Severity>().is_err());
    assert!("err".parse::<Severity>().is_err());
    assert!("".parse::<Severity>().is_err());
}

#[test]
fn severity_round_trips_through_as_str() {
    for severity in Severity::all() {
        assert_eq!(severity.as_str().parse::<Severity>().unwrap(), severity);
    }
}

#[test]
fn severity_default() {
    assert_eq!(Severity::default(), Severity::Info);
}
