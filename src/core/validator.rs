//! Break-time validator: checks a single day's entry against logical
//! ordering rules and the statutory meal/rest break requirements.
//!
//! All applicable errors are collected; nothing here stops the hour
//! computation, the report only gates certification.

use crate::models::{BreakKind, DayEntry, ValidationReport};
use crate::utils::time::{is_blank, minutes_of_day};

/// Shifts longer than this need a meal break.
pub const MEAL_REQUIRED_AFTER_MINUTES: i64 = 300;
/// Shifts longer than this need the meal break to last at least 30 minutes.
pub const LONG_MEAL_REQUIRED_AFTER_MINUTES: i64 = 600;
pub const LONG_MEAL_MIN_MINUTES: i64 = 30;
/// Shifts of at least this length need an AM rest break.
pub const AM_BREAK_REQUIRED_FROM_MINUTES: i64 = 210;
/// Shifts of at least this length need a PM rest break.
pub const PM_BREAK_REQUIRED_FROM_MINUTES: i64 = 360;

/// A time field as read from the entry.
#[derive(Debug, Clone, Copy)]
enum Field {
    Missing,
    Invalid,
    At(i64),
}

impl Field {
    fn read(value: &str) -> Self {
        if is_blank(value) {
            Field::Missing
        } else {
            minutes_of_day(value).map(Field::At).unwrap_or(Field::Invalid)
        }
    }

    fn is_present(&self) -> bool {
        !matches!(self, Field::Missing)
    }

    fn minutes(&self) -> Option<i64> {
        match self {
            Field::At(m) => Some(*m),
            _ => None,
        }
    }
}

/// Break window with both ends parsed.
#[derive(Debug, Clone, Copy)]
struct Window {
    start: i64,
    end: i64,
}

pub fn validate_day(day: &DayEntry) -> ValidationReport {
    if day.did_not_work {
        return ValidationReport::ok();
    }

    let mut errors = Vec::new();

    let time_in = read_field(&mut errors, "Time in", &day.time_in);
    let time_out = read_field(&mut errors, "Time out", &day.time_out);

    if !time_in.is_present() && !time_out.is_present() {
        // Not filled in yet.
        return ValidationReport::from_errors(errors);
    }

    if time_in.is_present() && !time_out.is_present() {
        errors.push("Time out is required when time in is provided".to_string());
    }
    if time_out.is_present() && !time_in.is_present() {
        errors.push("Time in is required when time out is provided".to_string());
    }

    let shift = match (time_in.minutes(), time_out.minutes()) {
        (Some(start), Some(end)) => {
            if start >= end {
                errors.push("Time in must be before time out".to_string());
                None
            } else {
                Some(Window { start, end })
            }
        }
        _ => None,
    };

    let meal = check_break(&mut errors, day, BreakKind::Meal, shift);
    let am = check_break(&mut errors, day, BreakKind::Am, shift);
    let pm = check_break(&mut errors, day, BreakKind::Pm, shift);

    if let Some(meal) = meal {
        if let Some(am) = am
            && am.end > meal.start
        {
            errors.push("AM break must end before the meal break starts".to_string());
        }
        if let Some(pm) = pm
            && pm.start < meal.end
        {
            errors.push("PM break must start after the meal break ends".to_string());
        }
    }

    if let Some(shift) = shift {
        check_statutory(&mut errors, day, shift.end - shift.start);
    }

    ValidationReport::from_errors(errors)
}

fn read_field(errors: &mut Vec<String>, label: &str, value: &str) -> Field {
    let field = Field::read(value);
    if let Field::Invalid = field {
        errors.push(format!(
            "{} has an invalid time format: '{}'",
            label,
            value.trim()
        ));
    }
    field
}

/// Pairing, ordering and containment checks for one break.
/// Returns the window when it is complete and well ordered.
fn check_break(
    errors: &mut Vec<String>,
    day: &DayEntry,
    kind: BreakKind,
    shift: Option<Window>,
) -> Option<Window> {
    let label = kind.label();
    let (start_raw, end_raw) = day.break_times(kind);

    let start = read_field(errors, &format!("{label} start"), start_raw);
    let end = read_field(errors, &format!("{label} end"), end_raw);

    match (start.is_present(), end.is_present()) {
        (false, false) => return None,
        (true, false) => {
            errors.push(format!("{label} end time is required when start is provided"));
            return None;
        }
        (false, true) => {
            errors.push(format!("{label} start time is required when end is provided"));
            return None;
        }
        (true, true) => {}
    }

    let (start, end) = (start.minutes()?, end.minutes()?);

    if start >= end {
        errors.push(format!("{label} start must be before its end"));
        return None;
    }

    if let Some(shift) = shift
        && (start < shift.start || end > shift.end)
    {
        errors.push(format!("{label} must be within work hours"));
    }

    Some(Window { start, end })
}

fn check_statutory(errors: &mut Vec<String>, day: &DayEntry, shift_minutes: i64) {
    let present = |kind: BreakKind| {
        let (s, e) = day.break_times(kind);
        !is_blank(s) && !is_blank(e)
    };

    if shift_minutes > MEAL_REQUIRED_AFTER_MINUTES && !present(BreakKind::Meal) {
        errors.push("A meal break is required for shifts over 5 hours".to_string());
    }

    if shift_minutes > LONG_MEAL_REQUIRED_AFTER_MINUTES && present(BreakKind::Meal) {
        let meal_minutes = match (
            minutes_of_day(&day.meal_break_start),
            minutes_of_day(&day.meal_break_end),
        ) {
            (Some(s), Some(e)) => e - s,
            _ => 0,
        };
        if meal_minutes < LONG_MEAL_MIN_MINUTES {
            errors.push(
                "A meal break of at least 30 minutes is required for shifts over 10 hours"
                    .to_string(),
            );
        }
    }

    if shift_minutes >= AM_BREAK_REQUIRED_FROM_MINUTES && !present(BreakKind::Am) {
        errors.push("An AM rest break is required for shifts of 3.5 hours or more".to_string());
    }

    if shift_minutes >= PM_BREAK_REQUIRED_FROM_MINUTES && !present(BreakKind::Pm) {
        errors.push("A PM rest break is required for shifts of 6 hours or more".to_string());
    }
}
