use chrono::NaiveDate;

use crate::intake::validate::{
    normalize_email, normalize_phone, parse_date, ValidationError, DATE_CALENDAR_DETAIL,
    DATE_FORMAT_DETAIL,
};

#[test]
fn phone_strips_international_prefix() {
    assert_eq!(normalize_phone("0012025550123"), Ok(2025550123));
    // Any two characters after the leading zero are discarded unseen.
    assert_eq!(normalize_phone("0992025550123"), Ok(2025550123));
}

#[test]
fn phone_strips_plus_prefix() {
    assert_eq!(normalize_phone("+12025550123"), Ok(2025550123));
    assert_eq!(normalize_phone("+72025550123"), Ok(2025550123));
}

#[test]
fn phone_prefix_stripping_counts_characters_not_bytes() {
    // Discarded prefix characters may be multibyte; the split point is the
    // character boundary, never a byte offset.
    assert_eq!(normalize_phone("+\u{e9}2025550123"), Ok(2025550123));
    assert_eq!(normalize_phone("0\u{e9}12025550123"), Ok(2025550123));
    assert_eq!(normalize_phone("0\u{20ac}\u{20ac}2025550123"), Ok(2025550123));

    // Fewer characters than the prefix width leaves nothing to validate.
    assert!(matches!(
        normalize_phone("0\u{e9}"),
        Err(ValidationError::InvalidPhone { .. })
    ));
}

#[test]
fn phone_accepts_bare_ten_digits() {
    assert_eq!(normalize_phone("2025550123"), Ok(2025550123));
}

#[test]
fn phone_rejects_everything_else() {
    for raw in [
        "",
        "555-0123",
        "202555012",
        "20255501234",
        "20255501a3",
        "+1202555012",
        "+120255501234",
        "0012025550",
        "(202) 555-0123",
    ] {
        assert!(
            matches!(normalize_phone(raw), Err(ValidationError::InvalidPhone { .. })),
            "{raw:?} should be rejected"
        );
    }
}

#[test]
fn email_requires_an_at_sign() {
    assert_eq!(
        normalize_email("person@example.com"),
        Ok("person@example.com".to_string())
    );
    // Returned unchanged, whatever surrounds the '@'.
    assert_eq!(normalize_email("@"), Ok("@".to_string()));
    assert_eq!(normalize_email("a@@b"), Ok("a@@b".to_string()));

    assert!(matches!(
        normalize_email("person.example.com"),
        Err(ValidationError::InvalidEmail { .. })
    ));
    assert!(matches!(
        normalize_email(""),
        Err(ValidationError::InvalidEmail { .. })
    ));
}

#[test]
fn date_accepts_unpadded_components() {
    let padded = parse_date("2024-02-05").expect("padded date parses");
    let unpadded = parse_date("2024-2-5").expect("unpadded date parses");
    assert_eq!(padded, unpadded);
    assert_eq!(padded, NaiveDate::from_ymd_opt(2024, 2, 5).expect("valid"));
}

#[test]
fn date_accepts_leap_day() {
    assert!(parse_date("2024-02-29").is_ok());
}

#[test]
fn date_distinguishes_format_from_calendar_failures() {
    for raw in ["2024-02", "2024-02-05-1", "2024/02/05", "2024-xx-05", ""] {
        match parse_date(raw) {
            Err(ValidationError::InvalidDate { detail, .. }) => {
                assert_eq!(detail, DATE_FORMAT_DETAIL, "{raw:?}");
            }
            other => panic!("expected format error for {raw:?}, got {other:?}"),
        }
    }

    for raw in ["2024-02-30", "2023-02-29", "2024-13-01", "2024-00-10"] {
        match parse_date(raw) {
            Err(ValidationError::InvalidDate { detail, .. }) => {
                assert_eq!(detail, DATE_CALENDAR_DETAIL, "{raw:?}");
            }
            other => panic!("expected calendar error for {raw:?}, got {other:?}"),
        }
    }
}
