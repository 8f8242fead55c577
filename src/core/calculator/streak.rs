//! Consecutive-day tracker: walks the week in canonical order and marks
//! the 7th (or later) day of an unbroken run of worked days.

use crate::models::{Timesheet, Weekday};
use tracing::debug;

/// Length of an unbroken run of worked days that triggers 7th-day pay.
pub const SEVENTH_DAY_STREAK: u32 = 7;

/// Per-day context fed to the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayContext {
    pub day: Weekday,
    pub worked: bool,
    /// Running count of consecutive worked days, this day included.
    pub streak: u32,
    pub is_weekend: bool,
    pub is_seventh_consecutive_day: bool,
}

/// Annotate the seven days of the week.
///
/// `prior_streak` is the number of consecutive worked days that closed
/// the previous week (0 when unknown).
pub fn track_week(sheet: &Timesheet, prior_streak: u32) -> [DayContext; 7] {
    let mut streak = prior_streak;

    Weekday::ALL.map(|day| {
        let worked = sheet.day(day).is_some_and(|d| d.is_worked());

        streak = if worked { streak.saturating_add(1) } else { 0 };
        let is_seventh = worked && streak >= SEVENTH_DAY_STREAK;

        if is_seventh {
            debug!(day = day.key(), streak, "7th consecutive work day");
        }

        DayContext {
            day,
            worked,
            streak,
            is_weekend: day.is_weekend(),
            is_seventh_consecutive_day: is_seventh,
        }
    })
}

/// Streak still open after the last day of the week.
pub fn trailing_streak(contexts: &[DayContext]) -> u32 {
    contexts.last().map(|c| c.streak).unwrap_or(0)
}
