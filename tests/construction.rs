use tempus::{ErrorKind, Moment, Month, TempusError, Unit, DEFAULT_FORMAT};

#[test]
fn parse_format_roundtrip() {
    let cases: &[(&str, &str)] = &[
        ("2020-06-15 12:30:45+0000", DEFAULT_FORMAT),
        ("2020-06-15T12:30:45+0200", "%Y-%m-%dT%H:%M:%S%z"),
        ("2020-01-01", "%Y-%m-%d"),
        ("15/06/2020 12:30", "%d/%m/%Y %H:%M"),
    ];
    for &(input, format) in cases {
        let moment = Moment::parse_with_format(input, format).unwrap();
        assert_eq!(
            moment.format(format),
            input,
            "roundtrip failed for {input:?} with {format:?}"
        );
    }
}

#[test]
fn default_format_is_engine_offset_form() {
    let moment = Moment::parse("2021-12-31 23:59:59+0100").unwrap();
    assert_eq!(moment.to_string(), "2021-12-31 23:59:59+0100");
}

#[test]
fn invalid_input_is_range_kind() {
    let err = Moment::parse("definitely not a date").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert!(matches!(err, TempusError::InvalidDate { .. }));
}

#[test]
fn nonexistent_calendar_day_rejected() {
    assert!(Moment::parse_with_format("2021-02-29", "%Y-%m-%d").is_err());
    assert!(Moment::parse_with_format("2021-04-31", "%Y-%m-%d").is_err());
    assert!(Moment::parse_with_format("2020-02-29", "%Y-%m-%d").is_ok());
}

#[test]
fn copies_are_independent_snapshots() {
    let original = Moment::parse("2020-06-15 12:30:45+0000").unwrap();
    let copy = original;
    let mutated = copy.add((1, Unit::Days)).unwrap();
    assert_eq!(original, copy);
    assert_ne!(original, mutated);
}

#[test]
fn native_engine_value_wraps_directly() {
    let dt = chrono::DateTime::parse_from_rfc3339("2020-06-15T12:30:45+02:00").unwrap();
    let moment = Moment::from(dt);
    assert_eq!(moment.as_datetime(), dt);
    assert_eq!(moment.month(), Month::June);
}

#[test]
fn timestamp_is_canonical_across_offsets() {
    let utc = Moment::parse("2020-06-15 12:00:00+0000").unwrap();
    let shifted = Moment::parse("2020-06-15 14:00:00+0200").unwrap();
    assert_eq!(utc.timestamp_millis(), shifted.timestamp_millis());
    assert_eq!(utc, shifted);
}

#[test]
fn serde_roundtrip() {
    let moment = Moment::parse("2020-06-15 12:30:45+0200").unwrap();
    let json = serde_json::to_string(&moment).unwrap();
    let back: Moment = serde_json::from_str(&json).unwrap();
    assert_eq!(moment, back);
}

#[test]
fn now_is_constructible() {
    // Smoke test only: `now` depends on the host clock.
    let a = Moment::now();
    let b = a.add((1, Unit::Seconds)).unwrap();
    assert!(a.is_before(b, None));
}
