// File: ./src/model/date.rs
//! Parsing of the two accepted date shapes: `DD/MM` and `DD/MM/YYYY`.
use crate::error::ReminderError;
use chrono::{Datelike, NaiveDate};

const SHORT_LEN: usize = 5;
const LONG_LEN: usize = 10;

// Leap year used to validate yearless dates so that 29/02 is accepted.
const LEAP_PROBE_YEAR: i32 = 2000;

/// A (month, day) pair that is valid in at least one Gregorian year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    pub fn new(month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(LEAP_PROBE_YEAR, month, day).map(|_| Self { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn is_leap_day(&self) -> bool {
        self.month == 2 && self.day == 29
    }

    /// The calendar date this pair falls on in `year`.
    /// Feb 29 falls on Mar 1 in non-leap years.
    pub fn in_year(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .unwrap_or(NaiveDate::MAX)
    }
}

/// Output of [`resolve`]: where the event falls in the year, and the year it
/// first happened if the text carried one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDate {
    pub month_day: MonthDay,
    pub origin_year: Option<i32>,
}

impl ResolvedDate {
    /// The exact anchored date, only known when the text carried a year.
    pub fn anchored(&self) -> Option<NaiveDate> {
        self.origin_year
            .and_then(|y| NaiveDate::from_ymd_opt(y, self.month_day.month, self.month_day.day))
    }
}

/// Parses reminder date text.
///
/// Shape is decided by length alone: 5 characters is `DD/MM`, 10 is
/// `DD/MM/YYYY`. Calendar validation happens after the shape check, and the
/// one-time year requirement is checked last.
pub fn resolve(text: &str, one_time: bool) -> Result<ResolvedDate, ReminderError> {
    let invalid = || ReminderError::InvalidDateFormat {
        text: text.to_string(),
    };

    let resolved = match text.len() {
        SHORT_LEN if has_shape(text, &[2]) => {
            let probe = format!("{}/{}", text, LEAP_PROBE_YEAR);
            let date = NaiveDate::parse_from_str(&probe, "%d/%m/%Y").map_err(|_| invalid())?;
            ResolvedDate {
                month_day: MonthDay {
                    month: date.month(),
                    day: date.day(),
                },
                origin_year: None,
            }
        }
        LONG_LEN if has_shape(text, &[2, 5]) => {
            let date = NaiveDate::parse_from_str(text, "%d/%m/%Y").map_err(|_| invalid())?;
            ResolvedDate {
                month_day: MonthDay {
                    month: date.month(),
                    day: date.day(),
                },
                origin_year: Some(date.year()),
            }
        }
        _ => return Err(invalid()),
    };

    if one_time && resolved.origin_year.is_none() {
        return Err(ReminderError::MissingYear {
            text: text.to_string(),
        });
    }

    Ok(resolved)
}

/// Digits everywhere except for '/' at the given byte offsets.
fn has_shape(text: &str, slashes: &[usize]) -> bool {
    text.bytes().enumerate().all(|(i, b)| {
        if slashes.contains(&i) {
            b == b'/'
        } else {
            b.is_ascii_digit()
        }
    })
}
