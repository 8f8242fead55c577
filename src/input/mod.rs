//! Reading and writing timesheet files (JSON or YAML, chosen by extension).

mod reader;

pub use reader::{SheetFormat, load_timesheet, save_timesheet};
