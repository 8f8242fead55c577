//! Break evaluation: duration of each break and whether it is deducted
//! from the worked time.

use crate::models::{BreakKind, DayEntry};
use crate::utils::time::{is_blank, minutes_between};
use tracing::trace;

/// Rest breaks up to this many minutes are paid and stay in worked time.
pub const PAID_BREAK_MAX_MINUTES: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakEvaluation {
    pub kind: BreakKind,
    pub minutes: i64,
    pub deducted: bool,
}

impl BreakEvaluation {
    pub fn deducted_hours(&self) -> f64 {
        if self.deducted {
            self.minutes as f64 / 60.0
        } else {
            0.0
        }
    }
}

/// Break length rounded to the nearest whole minute.
pub fn break_minutes(start: &str, end: &str) -> i64 {
    minutes_between(start, end)
}

/// A rest break is deducted only when it runs longer than 10 minutes.
pub fn is_deductible(start: &str, end: &str) -> bool {
    if is_blank(start) || is_blank(end) {
        return false;
    }
    break_minutes(start, end) > PAID_BREAK_MAX_MINUTES
}

/// Evaluate one break slot of the day.
/// Meal breaks are always deducted when both ends are present.
pub fn evaluate(day: &DayEntry, kind: BreakKind) -> BreakEvaluation {
    let (start, end) = day.break_times(kind);
    let present = !is_blank(start) && !is_blank(end);

    let minutes = if present { break_minutes(start, end) } else { 0 };
    let deducted = match kind {
        BreakKind::Meal => present,
        BreakKind::Am | BreakKind::Pm => is_deductible(start, end),
    };

    trace!(break_kind = kind.label(), minutes, deducted, "break evaluated");

    BreakEvaluation {
        kind,
        minutes,
        deducted,
    }
}

pub fn evaluate_all(day: &DayEntry) -> [BreakEvaluation; 3] {
    BreakKind::ALL.map(|kind| evaluate(day, kind))
}
