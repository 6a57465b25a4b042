// Tests for next-occurrence lookup and lookahead windows.
use britto::model::date::resolve;
use britto::model::occurrence::{effective_range, is_due, next_occurrence, scheduled_occurrence};
use britto::model::{MonthDay, Reminder};
use chrono::NaiveDate;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn md(m: u32, d: u32) -> MonthDay {
    MonthDay::new(m, d).unwrap()
}

#[test]
fn test_same_day_is_today() {
    let occ = next_occurrence(md(12, 20), ymd(2024, 12, 20));
    assert_eq!(occ.date, ymd(2024, 12, 20));
    assert_eq!(occ.days_until, 0);
}

#[test]
fn test_later_this_year() {
    let occ = next_occurrence(md(12, 31), ymd(2024, 1, 1));
    assert_eq!(occ.date, ymd(2024, 12, 31));
    assert_eq!(occ.days_until, 365);
}

#[test]
fn test_passed_rolls_to_next_year() {
    let occ = next_occurrence(md(1, 2), ymd(2024, 12, 25));
    assert_eq!(occ.date, ymd(2025, 1, 2));
    assert_eq!(occ.days_until, 8);

    let occ = next_occurrence(md(12, 19), ymd(2024, 12, 20));
    assert_eq!(occ.date, ymd(2025, 12, 19));
    assert_eq!(occ.days_until, 364);
}

#[test]
fn test_days_until_never_negative() {
    let mut now = ymd(2023, 1, 1);
    while now < ymd(2025, 1, 1) {
        for pair in [md(1, 1), md(2, 29), md(6, 15), md(12, 31)] {
            let occ = next_occurrence(pair, now);
            assert!(occ.days_until >= 0, "{:?} from {}", pair, now);
            assert!(occ.date >= now);
        }
        now = now.succ_opt().unwrap();
    }
}

#[test]
fn test_leap_day_in_non_leap_year_is_march_first() {
    let occ = next_occurrence(md(2, 29), ymd(2023, 2, 27));
    assert_eq!(occ.date, ymd(2023, 3, 1));
    assert_eq!(occ.days_until, 2);

    let occ = next_occurrence(md(2, 29), ymd(2024, 2, 27));
    assert_eq!(occ.date, ymd(2024, 2, 29));
}

#[test]
fn test_is_due_boundaries() {
    assert!(is_due(0, 0));
    assert!(is_due(0, 10));
    assert!(is_due(10, 10));
    assert!(!is_due(11, 10));
    assert!(!is_due(-1, 10));
}

#[test]
fn test_range_override_takes_precedence() {
    let plain = Reminder::new("Plain", "10/05");
    let wide = Reminder::new("Wide", "10/05").with_range(25);

    assert_eq!(effective_range(&plain, 15), 15);
    assert_eq!(effective_range(&wide, 15), 25);
    assert!(is_due(20, effective_range(&wide, 15)));
    assert!(!is_due(20, effective_range(&plain, 15)));
}

#[test]
fn test_one_time_only_on_anchored_date() {
    let resolved = resolve("05/01/2024", true).unwrap();

    let occ = scheduled_occurrence(&resolved, true, ymd(2024, 1, 1)).unwrap();
    assert_eq!(occ.date, ymd(2024, 1, 5));
    assert_eq!(occ.days_until, 4);

    // Does not come back the following year.
    assert_eq!(scheduled_occurrence(&resolved, true, ymd(2024, 1, 6)), None);
    assert_eq!(scheduled_occurrence(&resolved, true, ymd(2024, 12, 31)), None);

    // The same text as a recurring entry does.
    let occ = scheduled_occurrence(&resolved, false, ymd(2024, 12, 31)).unwrap();
    assert_eq!(occ.date, ymd(2025, 1, 5));
}

#[test]
fn test_age_at_occurrence() {
    let occ = next_occurrence(md(1, 2), ymd(2024, 12, 25));
    assert_eq!(occ.age(Some(1990)), 35);
    assert_eq!(occ.age(None), 0);
}
