// src/export/model.rs

use crate::models::{Timesheet, WeekTotals, Weekday};
use crate::utils::time::format_minutes;
use serde::Serialize;

/// Flat per-day row for CSV / JSON export.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DayExport {
    pub day: String,
    pub date: String,
    pub time_in: String,
    pub time_out: String,
    pub regular: f64,
    pub overtime: f64,
    pub double_time: f64,
    pub total_worked: f64,
    pub seventh_day: bool,
    pub out_of_town: String,
    pub reasons: String,
}

/// JSON document: rows plus weekly totals.
#[derive(Serialize, Clone, Debug)]
pub struct WeekExport {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub employee: String,
    pub days: Vec<DayExport>,
    pub totals: WeekTotals,
}

/// Label used in the `day` column of the CSV totals row.
pub(crate) const TOTAL_LABEL: &str = "total";

/// Build one row per canonical day from an already computed timesheet.
pub(crate) fn week_to_rows(sheet: &Timesheet) -> Vec<DayExport> {
    Weekday::ALL
        .into_iter()
        .filter_map(|d| sheet.day(d).map(|entry| (d, entry)))
        .map(|(d, entry)| DayExport {
            day: d.key().to_string(),
            date: sheet
                .date_of(d)
                .map(|dt| dt.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            time_in: entry.time_in.clone(),
            time_out: entry.time_out.clone(),
            regular: entry.total_regular_hours,
            overtime: entry.total_overtime_hours,
            double_time: entry.total_double_time_hours,
            total_worked: entry.total_hours(),
            seventh_day: entry.is_seventh_consecutive_day,
            out_of_town: format_minutes(entry.out_of_town_total_minutes()),
            reasons: entry.reasons.clone(),
        })
        .collect()
}

pub(crate) fn totals_row(totals: &WeekTotals) -> DayExport {
    DayExport {
        day: TOTAL_LABEL.to_string(),
        date: String::new(),
        time_in: String::new(),
        time_out: String::new(),
        regular: totals.regular,
        overtime: totals.overtime,
        double_time: totals.double_time,
        total_worked: totals.total,
        seventh_day: false,
        out_of_town: format_minutes(totals.out_of_town_minutes),
        reasons: String::new(),
    }
}
