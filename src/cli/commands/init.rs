use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: create the configuration directory and
/// default configuration file. Nothing is written in test mode.
pub fn handle(cli: &Cli) -> AppResult<()> {
    info("Initializing timesheet…");

    if cli.test {
        info("Test mode: configuration file not written");
        return Ok(());
    }

    let (path, created) = Config::init(cli.config.as_deref())?;

    if created {
        success(format!("Config file created: {}", path.display()));
    } else {
        info(format!("Config file already present: {}", path.display()));
    }

    Ok(())
}
