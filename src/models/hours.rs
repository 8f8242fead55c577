use serde::Serialize;

/// Classified hours of a single day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DayHours {
    pub regular: f64,
    pub overtime: f64,
    pub double_time: f64,
    pub total_worked: f64,
}

impl DayHours {
    pub fn has_premium(&self) -> bool {
        self.overtime > 0.0 || self.double_time > 0.0
    }
}

/// Weekly sums of the per-day classifications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct WeekTotals {
    pub regular: f64,
    pub overtime: f64,
    pub double_time: f64,
    pub total: f64,
    /// Consecutive worked days at the end of the week (carry into next week).
    pub trailing_streak: u32,
    /// Informational only, never part of any bucket.
    pub out_of_town_minutes: i64,
}
