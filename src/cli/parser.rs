use crate::export::ExportFormat;
use crate::models::Weekday;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for timesheet
/// CLI application to classify weekly hours and check break compliance
#[derive(Parser)]
#[command(
    name = "timesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Classify a timesheet week into regular, overtime and double-time hours and check breaks",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run in test mode (no config file is written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Classify the hours of a timesheet week and print them
    Calc {
        /// Timesheet file (.json, .yaml or .yml)
        file: String,

        /// Consecutive worked days that closed the previous week
        #[arg(long, default_value_t = 0)]
        carry: u32,

        /// Any date of the week (YYYY-MM-DD); overrides the file's week start
        #[arg(long, value_name = "DATE")]
        week: Option<String>,

        /// Also show the break evaluation of each day
        #[arg(long)]
        details: bool,

        /// Write the computed hours and flags back into the file
        #[arg(long)]
        write: bool,
    },

    /// Check break entries of a timesheet week
    Validate {
        /// Timesheet file (.json, .yaml or .yml)
        file: String,

        /// Validate a single day only (monday..sunday or mon..sun)
        #[arg(long)]
        day: Option<Weekday>,

        /// Consecutive worked days that closed the previous week
        #[arg(long, default_value_t = 0)]
        carry: u32,
    },

    /// Export the classified week
    Export {
        /// Timesheet file (.json, .yaml or .yml)
        file: String,

        /// Export format: csv, json (default from config)
        #[arg(long, value_name = "FORMAT")]
        format: Option<ExportFormat>,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        out: String,

        /// Consecutive worked days that closed the previous week
        #[arg(long, default_value_t = 0)]
        carry: u32,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
