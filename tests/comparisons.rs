use tempus::{Inclusivity, Moment, Unit};

fn at(s: &str) -> Moment {
    Moment::parse(s).unwrap()
}

#[test]
fn diff_sign_convention() {
    let instants = [
        at("2019-12-31 23:59:59+0000"),
        at("2020-01-01 00:00:00+0000"),
        at("2020-06-15 12:30:45+0200"),
        at("2021-03-01 06:00:00+0000"),
    ];
    for a in instants {
        for b in instants {
            assert_eq!(
                a.diff(b, None),
                -b.diff(a, None),
                "sign convention violated for {a} vs {b}"
            );
        }
    }
}

#[test]
fn diff_unit_truncation() {
    let a = at("2020-01-08 18:00:00+0000");
    let b = at("2020-01-01 00:00:00+0000");
    assert_eq!(a.diff(b, None), 7 * 86_400_000 + 18 * 3_600_000);
    assert_eq!(a.diff(b, Some(Unit::Days)), 7);
    assert_eq!(a.diff(b, Some(Unit::Weeks)), 1);
    assert_eq!(a.diff(b, Some(Unit::Hours)), 186);
    assert_eq!(b.diff(a, Some(Unit::Days)), -7);
}

#[test]
fn diff_months_counts_whole_months() {
    assert_eq!(
        at("2020-03-01 00:00:00+0000").diff(at("2020-01-31 00:00:00+0000"), Some(Unit::Months)),
        1
    );
    assert_eq!(
        at("2020-02-29 00:00:00+0000").diff(at("2020-01-31 00:00:00+0000"), Some(Unit::Months)),
        0
    );
    assert_eq!(
        at("2021-01-31 00:00:00+0000").diff(at("2020-01-31 00:00:00+0000"), Some(Unit::Years)),
        1
    );
}

#[test]
fn diff_accepts_native_engine_values() {
    let a = at("2020-01-02 00:00:00+0000");
    let native = chrono::DateTime::parse_from_rfc3339("2020-01-01T00:00:00+00:00").unwrap();
    assert_eq!(a.diff(native, Some(Unit::Days)), 1);
    assert!(a.is_after(native, None));
    assert!(!a.is_before(native, Some(Unit::Years)));
}

#[test]
fn granular_ordering_ignores_smaller_fields() {
    let morning = at("2020-06-15 01:00:00+0000");
    let night = at("2020-06-15 23:00:00+0000");
    assert!(morning.is_before(night, None));
    assert!(!morning.is_before(night, Some(Unit::Days)));
    assert!(!night.is_after(morning, Some(Unit::Days)));
    assert!(night.is_after(morning, Some(Unit::Hours)));
}

#[test]
fn between_inclusivity_at_the_from_endpoint() {
    let from = at("2020-01-01 00:00:00+0000");
    let to = at("2020-01-31 00:00:00+0000");
    let x = at("2020-01-01 00:00:00+0000");

    assert!(x.is_between(&from, &to, Some(Unit::Days), Inclusivity::IncludeFrom));
    assert!(!x.is_between(&from, &to, Some(Unit::Days), Inclusivity::Exclusive));
}

#[test]
fn between_inclusivity_at_the_to_endpoint() {
    let from = at("2020-01-01 00:00:00+0000");
    let to = at("2020-01-31 00:00:00+0000");
    let x = at("2020-01-31 18:00:00+0000");

    // Same calendar day as `to` at day granularity.
    assert!(x.is_between(&from, &to, Some(Unit::Days), Inclusivity::IncludeTo));
    assert!(x.is_between(&from, &to, Some(Unit::Days), Inclusivity::Inclusive));
    assert!(!x.is_between(&from, &to, Some(Unit::Days), Inclusivity::IncludeFrom));
    // Without granularity, 18:00 is strictly after midnight of `to`.
    assert!(!x.is_between(&from, &to, None, Inclusivity::IncludeTo));
}

#[test]
fn between_default_policy_is_exclusive() {
    let from = at("2020-01-01 00:00:00+0000");
    let to = at("2020-01-31 00:00:00+0000");
    assert!(!from.is_between(&from, &to, Some(Unit::Days), Inclusivity::default()));
    let inside = at("2020-01-15 00:00:00+0000");
    assert!(inside.is_between(&from, &to, Some(Unit::Days), Inclusivity::default()));
}

#[test]
fn inclusivity_codes_roundtrip_to_variants() {
    let cases: &[(&str, Inclusivity)] = &[
        ("()", Inclusivity::Exclusive),
        ("[)", Inclusivity::IncludeFrom),
        ("(]", Inclusivity::IncludeTo),
        ("[]", Inclusivity::Inclusive),
    ];
    for &(code, expected) in cases {
        assert_eq!(code.parse::<Inclusivity>().unwrap(), expected);
    }
    assert!("[[".parse::<Inclusivity>().is_err());
}
