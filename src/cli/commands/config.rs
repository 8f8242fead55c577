use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = &cli.command
    {
        let path = cli.config.clone().unwrap_or_else(Config::config_file);

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }

        if *edit_config {
            let editor = editor.clone().unwrap_or_else(default_editor);
            edit_file(&editor, &path)?;
            success(format!("Configuration file edited with '{editor}'"));
        }
    }

    Ok(())
}

/// $EDITOR, then $VISUAL, then the platform default.
fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Open `path` in `editor`; a missing config file is created first so the
/// editor starts from the defaults.
fn edit_file(editor: &str, path: &Path) -> AppResult<()> {
    Config::init(Some(path))?;

    let status = Command::new(editor)
        .arg(path)
        .status()
        .map_err(|e| AppError::Config(format!("cannot start editor '{editor}': {e}")))?;

    if !status.success() {
        return Err(AppError::Config(format!(
            "editor '{editor}' exited with {status}"
        )));
    }
    Ok(())
}
