use crate::utils::time::{is_blank, round2};
use serde::{Deserialize, Serialize};

/// One calendar day of a timesheet week.
///
/// Times are kept as the raw "HH:MM" strings entered by the employee
/// (empty string = not provided). The hour totals and the 7th-day flag
/// are written back by the weekly computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DayEntry {
    pub did_not_work: bool,
    pub time_in: String,
    pub time_out: String,
    pub meal_break_start: String,
    pub meal_break_end: String,
    pub am_break_start: String,
    pub am_break_end: String,
    pub pm_break_start: String,
    pub pm_break_end: String,
    pub out_of_town_hours: i32,
    pub out_of_town_minutes: i32,
    pub reasons: String,

    pub total_regular_hours: f64,
    pub total_overtime_hours: f64,
    pub total_double_time_hours: f64,
    pub is_seventh_consecutive_day: bool,
}

/// The three break slots of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakKind {
    Meal,
    Am,
    Pm,
}

impl BreakKind {
    pub const ALL: [BreakKind; 3] = [BreakKind::Meal, BreakKind::Am, BreakKind::Pm];

    pub fn label(&self) -> &'static str {
        match self {
            BreakKind::Meal => "Meal break",
            BreakKind::Am => "AM break",
            BreakKind::Pm => "PM break",
        }
    }
}

impl DayEntry {
    /// Builder used by callers and tests for a plain in/out day.
    pub fn worked(time_in: &str, time_out: &str) -> Self {
        Self {
            time_in: time_in.to_string(),
            time_out: time_out.to_string(),
            ..Default::default()
        }
    }

    pub fn day_off() -> Self {
        Self {
            did_not_work: true,
            ..Default::default()
        }
    }

    pub fn with_break(mut self, kind: BreakKind, start: &str, end: &str) -> Self {
        let (s, e) = match kind {
            BreakKind::Meal => (&mut self.meal_break_start, &mut self.meal_break_end),
            BreakKind::Am => (&mut self.am_break_start, &mut self.am_break_end),
            BreakKind::Pm => (&mut self.pm_break_start, &mut self.pm_break_end),
        };
        *s = start.to_string();
        *e = end.to_string();
        self
    }

    /// (start, end) strings of the given break slot.
    pub fn break_times(&self, kind: BreakKind) -> (&str, &str) {
        match kind {
            BreakKind::Meal => (&self.meal_break_start, &self.meal_break_end),
            BreakKind::Am => (&self.am_break_start, &self.am_break_end),
            BreakKind::Pm => (&self.pm_break_start, &self.pm_break_end),
        }
    }

    /// A day counts as worked when it is not marked off and both
    /// time-in and time-out are filled.
    pub fn is_worked(&self) -> bool {
        !self.did_not_work && !is_blank(&self.time_in) && !is_blank(&self.time_out)
    }

    pub fn out_of_town_total_minutes(&self) -> i64 {
        self.out_of_town_hours as i64 * 60 + self.out_of_town_minutes as i64
    }

    /// Sum of the three buckets, kept at hundredths of an hour.
    pub fn total_hours(&self) -> f64 {
        round2(self.total_regular_hours + self.total_overtime_hours + self.total_double_time_hours)
    }

    pub(crate) fn clear_computed(&mut self) {
        self.total_regular_hours = 0.0;
        self.total_overtime_hours = 0.0;
        self.total_double_time_hours = 0.0;
        self.is_seventh_consecutive_day = false;
    }
}
