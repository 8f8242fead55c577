//! Caller-side "reason required" policy.
//!
//! The engine only classifies hours; asking the employee to justify
//! premium or weekend work is a presentation rule applied on top of its output.

use crate::models::{DayEntry, DayHours, Weekday};
use crate::utils::time::is_blank;

pub fn reason_required(hours: &DayHours, day: Weekday) -> bool {
    hours.has_premium() || (day.is_weekend() && hours.total_worked > 0.0)
}

/// Advisory message when a justification is needed but missing.
pub fn check_reason(entry: &DayEntry, day: Weekday, hours: &DayHours) -> Option<String> {
    if !reason_required(hours, day) || !is_blank(&entry.reasons) {
        return None;
    }

    let what = if hours.double_time > 0.0 {
        "double time"
    } else if hours.overtime > 0.0 && !day.is_weekend() {
        "overtime"
    } else {
        "weekend work"
    };

    Some(format!("A reason is required for {what} on {day}"))
}
