use crate::cli::commands::open_sheet;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        format,
        out,
        carry,
        force,
    } = cmd
    {
        let mut sheet = open_sheet(file, None)?;
        let format = format.unwrap_or(cfg.default_format);
        ExportLogic::export(&mut sheet, format, out, *carry, *force)?;
    }
    Ok(())
}
