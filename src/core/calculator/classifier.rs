//! Daily classifier: turns a day's raw times into regular, overtime
//! and double-time hours.

use crate::core::calculator::breaks;
use crate::models::{DayEntry, DayHours};
use crate::utils::time::{hours_between, is_blank, round2};
use tracing::debug;

/// Hours paid at base rate on an ordinary weekday.
pub const REGULAR_DAILY_LIMIT: f64 = 8.0;
/// Above this, weekday hours are paid as double time.
pub const OVERTIME_DAILY_LIMIT: f64 = 12.0;
/// On a 7th consecutive day, hours up to this are overtime, the rest double time.
pub const SEVENTH_DAY_OVERTIME_LIMIT: f64 = 8.0;

/// Worked hours of the day after break deductions, clamped at zero and
/// rounded to hundredths.
pub fn worked_hours(day: &DayEntry) -> f64 {
    if day.did_not_work || is_blank(&day.time_in) || is_blank(&day.time_out) {
        return 0.0;
    }

    let mut worked = hours_between(&day.time_in, &day.time_out);

    for eval in breaks::evaluate_all(day) {
        worked -= eval.deducted_hours();
    }

    round2(worked.max(0.0))
}

/// Split already-computed worked hours into pay buckets.
pub fn split_hours(worked: f64, is_weekend: bool, is_seventh_consecutive_day: bool) -> DayHours {
    let (regular, overtime, double_time) = if is_seventh_consecutive_day {
        if worked <= SEVENTH_DAY_OVERTIME_LIMIT {
            (0.0, worked, 0.0)
        } else {
            (
                0.0,
                SEVENTH_DAY_OVERTIME_LIMIT,
                worked - SEVENTH_DAY_OVERTIME_LIMIT,
            )
        }
    } else if is_weekend {
        (0.0, worked, 0.0)
    } else if worked <= REGULAR_DAILY_LIMIT {
        (worked, 0.0, 0.0)
    } else if worked <= OVERTIME_DAILY_LIMIT {
        (REGULAR_DAILY_LIMIT, worked - REGULAR_DAILY_LIMIT, 0.0)
    } else {
        (
            REGULAR_DAILY_LIMIT,
            OVERTIME_DAILY_LIMIT - REGULAR_DAILY_LIMIT,
            worked - OVERTIME_DAILY_LIMIT,
        )
    };

    DayHours {
        regular: round2(regular),
        overtime: round2(overtime),
        double_time: round2(double_time),
        total_worked: worked,
    }
}

/// Classify one day. Never fails: incomplete or malformed times give zeros.
pub fn classify_day(day: &DayEntry, is_weekend: bool, is_seventh_consecutive_day: bool) -> DayHours {
    let worked = worked_hours(day);
    let hours = split_hours(worked, is_weekend, is_seventh_consecutive_day);

    debug!(
        worked,
        is_weekend,
        is_seventh_consecutive_day,
        regular = hours.regular,
        overtime = hours.overtime,
        double_time = hours.double_time,
        "day classified"
    );

    hours
}
