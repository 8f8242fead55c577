use crate::cli::commands::open_sheet;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::policy::check_reason;
use crate::errors::{AppError, AppResult};
use crate::models::{Timesheet, Weekday};
use crate::ui::messages::{error, header, success, warning};
use crate::utils::formatting::wrap_indented;

const WRAP_WIDTH: usize = 78;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Validate { file, day, carry } = cmd {
        let mut sheet = open_sheet(file, None)?;

        // Reason policy needs the classified hours and 7th-day flags.
        Core::compute_week_with_carry(&mut sheet, *carry);

        let days: Vec<Weekday> = match day {
            Some(d) => vec![*d],
            None => Weekday::ALL.to_vec(),
        };

        header(format!("Validation of {}", file));

        let mut error_count = 0;
        for d in days {
            error_count += report_day(&sheet, d, cfg);
        }

        if error_count > 0 {
            return Err(AppError::ValidationFailed(error_count));
        }

        success("All checked days are valid");
    }
    Ok(())
}

/// Print the findings of one day, returning its number of errors.
fn report_day(sheet: &Timesheet, day: Weekday, cfg: &Config) -> usize {
    let Some(entry) = sheet.day(day) else {
        return 0;
    };

    let report = Core::validate_day(entry);

    if report.valid {
        println!("{:<10} ok", day.key());
    } else {
        for e in &report.errors {
            error(wrap_indented(
                &format!("{:<10} {}", day.key(), e),
                WRAP_WIDTH,
                "           ",
            ));
        }
    }

    if cfg.require_reasons {
        let hours = Core::classify_day(entry, day.is_weekend(), entry.is_seventh_consecutive_day);
        if let Some(msg) = check_reason(entry, day, &hours) {
            warning(wrap_indented(
                &format!("{:<10} {}", day.key(), msg),
                WRAP_WIDTH,
                "           ",
            ));
        }
    }

    report.errors.len()
}
