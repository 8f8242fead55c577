use chrono::{Datelike, Duration, NaiveDate};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Monday of the week containing `date`.
pub fn week_monday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// "02 Jun 2025 - 08 Jun 2025" style label for a week starting on `monday`.
pub fn week_label(monday: NaiveDate) -> String {
    let sunday = monday + Duration::days(6);
    format!(
        "{} - {}",
        monday.format("%d %b %Y"),
        sunday.format("%d %b %Y")
    )
}
