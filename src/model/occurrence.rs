// File: ./src/model/occurrence.rs
//! Next-occurrence lookup and lookahead window matching.
use crate::model::date::{MonthDay, ResolvedDate};
use crate::model::item::Reminder;
use chrono::{Datelike, NaiveDate};

/// A concrete upcoming date and its distance from "now", in whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    pub date: NaiveDate,
    pub days_until: i64,
}

impl Occurrence {
    fn from_date(date: NaiveDate, now: NaiveDate) -> Self {
        Self {
            date,
            days_until: (date - now).num_days(),
        }
    }

    /// Years elapsed since `origin_year`, zero when the origin is unknown.
    pub fn age(&self, origin_year: Option<i32>) -> i32 {
        origin_year.map_or(0, |y| self.date.year() - y)
    }
}

/// Earliest occurrence of `month_day` in `now`'s year or the next one that is
/// not strictly before `now`. Same day counts, with offset 0.
pub fn next_occurrence(month_day: MonthDay, now: NaiveDate) -> Occurrence {
    let date = [0, 1]
        .iter()
        .map(|ahead| month_day.in_year(now.year() + ahead))
        .find(|candidate| *candidate >= now)
        // Unreachable: any date in now.year() + 1 is after now.
        .unwrap_or_else(|| month_day.in_year(now.year() + 1));

    Occurrence::from_date(date, now)
}

/// Occurrence for a reminder according to its schedule.
///
/// Recurring entries go through [`next_occurrence`]. One-time entries only
/// occur on their anchored date and have no occurrence once it has passed.
pub fn scheduled_occurrence(
    resolved: &ResolvedDate,
    one_time: bool,
    now: NaiveDate,
) -> Option<Occurrence> {
    if !one_time {
        return Some(next_occurrence(resolved.month_day, now));
    }

    resolved
        .anchored()
        .filter(|date| *date >= now)
        .map(|date| Occurrence::from_date(date, now))
}

/// The window that applies to `reminder`: its own override, else the default.
pub fn effective_range(reminder: &Reminder, default_range: u32) -> u32 {
    reminder.range.unwrap_or(default_range)
}

pub fn is_due(days_until: i64, range_days: u32) -> bool {
    (0..=i64::from(range_days)).contains(&days_until)
}
