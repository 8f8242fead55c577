use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// User settings for the CLI. Wage rules are fixed and never configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_format")]
    pub default_format: ExportFormat,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_true")]
    pub show_weekend_marker: bool,
    #[serde(default = "default_true")]
    pub require_reasons: bool,
    #[serde(default = "default_true")]
    pub color_output: bool,
}

fn default_format() -> ExportFormat {
    ExportFormat::Csv
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            separator_char: default_separator_char(),
            show_weekend_marker: true,
            require_reasons: true,
            color_output: true,
        }
    }
}

impl Config {
    /// ANSI colours in tables, unless disabled here or through NO_COLOR.
    pub fn colors_enabled(&self) -> bool {
        self.color_output && std::env::var_os("NO_COLOR").is_none()
    }

    /// Return the standard configuration directory (~/.timesheet)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".timesheet")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timesheet.conf")
    }

    /// Load configuration from `path` (or the default location),
    /// falling back to defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the default configuration file. An existing file is kept.
    /// Returns the path and whether a new file was created.
    pub fn init(path: Option<&Path>) -> AppResult<(PathBuf, bool)> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if path.exists() {
            return Ok((path, false));
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = Config::default().to_yaml()?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok((path, true))
    }
}
