// Tests for parsing reminder date text.
use britto::error::ReminderError;
use britto::model::MonthDay;
use britto::model::date::resolve;

#[test]
fn test_every_valid_short_date_has_no_year() {
    for (text, month, day) in [("01/01", 1, 1), ("10/05", 5, 10), ("31/12", 12, 31), ("29/02", 2, 29)] {
        let r = resolve(text, false).unwrap();
        assert_eq!(r.month_day, MonthDay::new(month, day).unwrap(), "{}", text);
        assert_eq!(r.origin_year, None, "{}", text);
    }
}

#[test]
fn test_long_date_takes_trailing_year() {
    for (text, year) in [("25/12/1985", 1985), ("01/01/2000", 2000), ("29/02/2024", 2024)] {
        assert_eq!(resolve(text, false).unwrap().origin_year, Some(year), "{}", text);
    }
}

#[test]
fn test_wrong_length_is_invalid() {
    for text in ["", "1/5", "1/05", "10/5/85", "25/12/19850", "25/12/85"] {
        assert_eq!(
            resolve(text, false),
            Err(ReminderError::InvalidDateFormat {
                text: text.to_string()
            }),
            "{}",
            text
        );
    }
}

#[test]
fn test_calendar_invalid_dates() {
    // Right length, wrong calendar.
    for text in ["31/04", "30/02", "00/01", "12/13", "31/06/1990", "29/02/2023"] {
        assert!(
            matches!(resolve(text, false), Err(ReminderError::InvalidDateFormat { .. })),
            "{}",
            text
        );
    }
}

#[test]
fn test_one_time_requires_year() {
    assert_eq!(
        resolve("31/12", true),
        Err(ReminderError::MissingYear {
            text: "31/12".to_string()
        })
    );
    assert!(resolve("31/12/2024", true).is_ok());
}

#[test]
fn test_format_error_wins_over_missing_year() {
    assert!(matches!(
        resolve("31/04", true),
        Err(ReminderError::InvalidDateFormat { .. })
    ));
}
