use super::{day_entry::DayEntry, weekday::Weekday};
use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One timesheet week: all seven days keyed by their canonical name,
/// plus the weekly totals written back by the computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timesheet {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub employee: String,
    /// Monday of the week (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_start: Option<NaiveDate>,
    #[serde(default)]
    pub days: BTreeMap<Weekday, DayEntry>,
    #[serde(default)]
    pub total_regular_hours: f64,
    #[serde(default)]
    pub total_overtime_hours: f64,
    #[serde(default)]
    pub total_double_time_hours: f64,
}

impl Timesheet {
    /// A fresh week with seven empty days.
    pub fn empty() -> Self {
        Self {
            days: Weekday::ALL
                .into_iter()
                .map(|d| (d, DayEntry::default()))
                .collect(),
            ..Default::default()
        }
    }

    /// Enforce the all-or-nothing rule on loaded data:
    /// no days → seven empty days, a partial week → error.
    pub fn normalize(mut self) -> AppResult<Self> {
        match self.days.len() {
            0 => {
                self.days = Timesheet::empty().days;
                Ok(self)
            }
            7 => Ok(self),
            n => Err(AppError::IncompleteWeek(n)),
        }
    }

    pub fn day(&self, day: Weekday) -> Option<&DayEntry> {
        self.days.get(&day)
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut DayEntry {
        self.days.entry(day).or_default()
    }

    /// Calendar date of the given day, when the week start is known.
    pub fn date_of(&self, day: Weekday) -> Option<NaiveDate> {
        self.week_start
            .map(|start| start + Duration::days(day.index() as i64))
    }
}
