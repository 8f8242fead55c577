// src/export/logic.rs

use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_writable, resolve_output};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{WeekExport, week_to_rows};
use crate::models::Timesheet;
use crate::ui::messages::warning;

/// High level export of a classified week.
pub struct ExportLogic;

impl ExportLogic {
    /// Classify the week and write it out.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute output path (`~/` allowed)
    /// - `prior_streak`: consecutive worked days carried from the previous week
    pub fn export(
        sheet: &mut Timesheet,
        format: ExportFormat,
        file: &str,
        prior_streak: u32,
        force: bool,
    ) -> AppResult<()> {
        let path = resolve_output(file)?;
        ensure_writable(&path, force)?;

        let week = Self::build(sheet, prior_streak);

        if week.totals.total == 0.0 {
            warning("No worked hours in this timesheet, exporting an empty week.");
        }

        match format {
            ExportFormat::Csv => export_csv(&week, &path)?,
            ExportFormat::Json => export_json(&week, &path)?,
        }

        Ok(())
    }

    /// Compute the week and flatten it for export.
    pub fn build(sheet: &mut Timesheet, prior_streak: u32) -> WeekExport {
        let totals = Core::compute_week_with_carry(sheet, prior_streak);
        WeekExport {
            employee: sheet.employee.clone(),
            days: week_to_rows(sheet),
            totals,
        }
    }
}
