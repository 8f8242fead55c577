use crate::core::calculator::{classifier, weekly};
use crate::core::validator;
use crate::models::{DayEntry, DayHours, Timesheet, ValidationReport, WeekTotals, Weekday};

/// Entry point used by callers: the three engine operations plus a
/// whole-week validation pass.
pub struct Core;

impl Core {
    pub fn classify_day(
        day: &DayEntry,
        is_weekend: bool,
        is_seventh_consecutive_day: bool,
    ) -> DayHours {
        classifier::classify_day(day, is_weekend, is_seventh_consecutive_day)
    }

    pub fn compute_week(sheet: &mut Timesheet) -> WeekTotals {
        weekly::compute_week(sheet)
    }

    pub fn compute_week_with_carry(sheet: &mut Timesheet, prior_streak: u32) -> WeekTotals {
        weekly::compute_week_with_carry(sheet, prior_streak)
    }

    pub fn validate_day(day: &DayEntry) -> ValidationReport {
        validator::validate_day(day)
    }

    /// One report per day, canonical order. Missing days validate as empty.
    pub fn validate_week(sheet: &Timesheet) -> Vec<(Weekday, ValidationReport)> {
        Weekday::ALL
            .into_iter()
            .map(|d| {
                let report = sheet
                    .day(d)
                    .map(validator::validate_day)
                    .unwrap_or_else(ValidationReport::ok);
                (d, report)
            })
            .collect()
    }
}
