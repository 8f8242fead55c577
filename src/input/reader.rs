use crate::errors::{AppError, AppResult};
use crate::models::Timesheet;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Json,
    Yaml,
}

impl SheetFormat {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(SheetFormat::Json),
            "yaml" | "yml" => Ok(SheetFormat::Yaml),
            _ => Err(AppError::UnsupportedInput(path.display().to_string())),
        }
    }
}

/// Load a week from disk. A file without days gets seven empty days;
/// a partial week is rejected.
pub fn load_timesheet(path: &Path) -> AppResult<Timesheet> {
    let format = SheetFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;

    let sheet: Timesheet = match format {
        SheetFormat::Json => serde_json::from_str(&content)?,
        SheetFormat::Yaml => serde_yaml::from_str(&content)?,
    };

    info!(path = %path.display(), days = sheet.days.len(), "timesheet loaded");
    sheet.normalize()
}

/// Write the week back in the format implied by the file extension.
pub fn save_timesheet(path: &Path, sheet: &Timesheet) -> AppResult<()> {
    let content = match SheetFormat::from_path(path)? {
        SheetFormat::Json => serde_json::to_string_pretty(sheet)?,
        SheetFormat::Yaml => serde_yaml::to_string(sheet)?,
    };

    fs::write(path, content)?;
    info!(path = %path.display(), "timesheet written");
    Ok(())
}
