pub mod day_entry;
pub mod hours;
pub mod timesheet;
pub mod validation;
pub mod weekday;

pub use day_entry::{BreakKind, DayEntry};
pub use hours::{DayHours, WeekTotals};
pub use timesheet::Timesheet;
pub use validation::ValidationReport;
pub use weekday::Weekday;
