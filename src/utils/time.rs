//! Time utilities: parsing HH:MM, elapsed minutes/hours with overnight
//! wrap-around, hour rounding.

use chrono::{NaiveTime, Timelike};

pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Parses "HH:MM" (seconds accepted as "HH:MM:SS").
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

pub fn is_blank(t: &str) -> bool {
    t.trim().is_empty()
}

/// Seconds since midnight, `None` when empty or malformed.
pub fn seconds_of_day(t: &str) -> Option<i64> {
    parse_time(t).map(|nt| nt.num_seconds_from_midnight() as i64)
}

/// Whole minutes since midnight (seconds dropped).
pub fn minutes_of_day(t: &str) -> Option<i64> {
    seconds_of_day(t).map(|s| s / 60)
}

/// Elapsed seconds from `start` to `end`.
/// An `end` earlier than `start` is read as crossing midnight.
/// Empty or malformed input yields 0.
pub fn seconds_between(start: &str, end: &str) -> i64 {
    match (seconds_of_day(start), seconds_of_day(end)) {
        (Some(s), Some(mut e)) => {
            if e < s {
                e += SECONDS_PER_DAY;
            }
            e - s
        }
        _ => 0,
    }
}

/// Elapsed minutes rounded to the nearest whole minute.
pub fn minutes_between(start: &str, end: &str) -> i64 {
    (seconds_between(start, end) + 30) / 60
}

/// Elapsed hours between two time strings, unrounded.
pub fn hours_between(start: &str, end: &str) -> f64 {
    seconds_between(start, end) as f64 / 3600.0
}

/// Round to two decimal places (hundredths of an hour).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
