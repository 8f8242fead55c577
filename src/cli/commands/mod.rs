pub mod calc;
pub mod config;
pub mod export;
pub mod init;
pub mod validate;

use crate::errors::{AppError, AppResult};
use crate::input::load_timesheet;
use crate::models::Timesheet;
use crate::utils::date::{parse_date, week_monday};
use crate::utils::path::expand_tilde;

/// Load the timesheet named on the command line, optionally moving its
/// week start to the monday of `week`.
pub(crate) fn open_sheet(file: &str, week: Option<&str>) -> AppResult<Timesheet> {
    let mut sheet = load_timesheet(&expand_tilde(file))?;

    if let Some(w) = week {
        let date = parse_date(w).ok_or_else(|| AppError::InvalidDate(w.to_string()))?;
        sheet.week_start = Some(week_monday(date));
    }

    Ok(sheet)
}
