use tempus::{Moment, Month, TempusError, TimeField};

fn at(s: &str) -> Moment {
    Moment::parse(s).unwrap()
}

#[test]
fn strict_time_bounds() {
    let moment = at("2020-06-15 12:30:45+0000");

    let err = moment.set_time(24, None, None, None).unwrap_err();
    assert!(matches!(
        err,
        TempusError::TimeFieldOutOfRange {
            field: TimeField::Hour,
            value: 24,
            max: 23,
        }
    ));

    let err = moment.set_time(23, Some(60), None, None).unwrap_err();
    assert!(matches!(
        err,
        TempusError::TimeFieldOutOfRange {
            field: TimeField::Minute,
            ..
        }
    ));

    let err = moment.set_time(0, None, Some(60), None).unwrap_err();
    assert!(matches!(
        err,
        TempusError::TimeFieldOutOfRange {
            field: TimeField::Second,
            ..
        }
    ));

    let err = moment.set_time(0, None, None, Some(1000)).unwrap_err();
    assert!(matches!(
        err,
        TempusError::TimeFieldOutOfRange {
            field: TimeField::Millisecond,
            ..
        }
    ));

    assert!(moment.set_time(23, Some(59), Some(59), Some(999)).is_ok());
}

#[test]
fn strict_failure_applies_nothing() {
    let moment = at("2020-06-15 12:30:45+0000");
    let before = moment.timestamp_millis();
    let _ = moment.set_time(23, Some(60), None, None);
    assert_eq!(moment.timestamp_millis(), before);
}

#[test]
fn overflow_minute_rolls_into_hour() {
    let moment = at("2020-06-15 10:00:00+0000");
    let rolled = moment.set_time_with_overflow(0, Some(74), None, None).unwrap();
    assert_eq!((rolled.hour(), rolled.minute()), (1, 14));
}

#[test]
fn overflow_cascade_applies_in_field_order() {
    let moment = at("2020-06-15 10:00:00+0000");
    // 25 hours rolls into the next day, then 61 seconds rolls into a minute.
    let rolled = moment
        .set_time_with_overflow(25, Some(0), Some(61), None)
        .unwrap();
    assert_eq!(rolled.to_string(), "2020-06-16 01:01:01+0000");
}

#[test]
fn strict_date_rejects_overflowing_day() {
    let moment = at("2020-06-15 12:00:00+0000");

    let err = moment.set_date(2021, Month::February, 30).unwrap_err();
    assert_eq!(
        err,
        TempusError::DayOutOfRange {
            year: 2021,
            month: 2,
            day: 30,
            max_day: 28,
        }
    );

    // Leap years come from the engine's calendar.
    assert!(moment.set_date(2020, Month::February, 29).is_ok());
    assert!(moment.set_date(1900, Month::February, 29).is_err());
    assert!(moment.set_date(2000, Month::February, 29).is_ok());
}

#[test]
fn permissive_date_rolls_day_and_month() {
    let moment = at("2021-01-15 00:00:00+0000");

    let rolled = moment.set_date_with_overflow(2021, 1, 30).unwrap();
    assert_eq!(rolled.format("%Y-%m-%d"), "2021-03-02");

    // Month id 12 is January of the following year.
    let rolled = moment.set_date_with_overflow(2021, 12, 1).unwrap();
    assert_eq!(rolled.format("%Y-%m-%d"), "2022-01-01");
}

#[test]
fn bulk_generation_via_overflow() {
    // "The 31st of every month" wraps into the next month where needed.
    let start = at("2021-01-31 00:00:00+0000");
    let results: Vec<String> = (0..4)
        .map(|id| {
            start
                .set_date_with_overflow(2021, id, 31)
                .unwrap()
                .format("%Y-%m-%d")
        })
        .collect();
    assert_eq!(results, ["2021-01-31", "2021-03-03", "2021-03-31", "2021-05-01"]);
}

#[test]
fn setters_never_mutate_receiver() {
    let moment = at("2020-06-15 12:30:45+0000");
    let before = moment.timestamp_millis();
    let _ = moment.set_time(8, Some(15), None, None).unwrap();
    let _ = moment.set_time_with_overflow(99, None, None, None).unwrap();
    let _ = moment.set_date(2024, Month::December, 31).unwrap();
    let _ = moment.set_date_with_overflow(2024, 20, 40).unwrap();
    assert_eq!(moment.timestamp_millis(), before);
}
