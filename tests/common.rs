#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from any user configuration and colours.
pub fn ts(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("timesheet");
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .args(["--config", &conf_path(name)]);
    cmd
}

/// Per-test config file location (left in place between invocations).
pub fn conf_path(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timesheet.conf", name));
    path.to_string_lossy().to_string()
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timesheet.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh temp file and return its path.
pub fn write_sheet(name: &str, ext: &str, content: &str) -> String {
    let p = temp_path(name, ext);
    fs::write(&p, content).expect("write timesheet");
    p
}

/// A compliant 8h weekday: 08:00-16:30 with a 30 minute meal and two
/// paid 10 minute rest breaks.
pub const STANDARD_DAY: &str = r#"{
    "timeIn": "08:00", "timeOut": "16:30",
    "mealBreakStart": "12:00", "mealBreakEnd": "12:30",
    "amBreakStart": "10:00", "amBreakEnd": "10:10",
    "pmBreakStart": "15:00", "pmBreakEnd": "15:10"
}"#;

pub const OFF_DAY: &str = r#"{ "didNotWork": true }"#;

/// Week JSON: monday..friday standard days, weekend off.
pub fn standard_week_json() -> String {
    week_json(&[
        STANDARD_DAY,
        STANDARD_DAY,
        STANDARD_DAY,
        STANDARD_DAY,
        STANDARD_DAY,
        OFF_DAY,
        OFF_DAY,
    ])
}

/// Week JSON from seven day objects in canonical order.
pub fn week_json(days: &[&str; 7]) -> String {
    let names = [
        "monday",
        "tuesday",
        "wednesday",
        "thursday",
        "friday",
        "saturday",
        "sunday",
    ];
    let body: Vec<String> = names
        .iter()
        .zip(days.iter())
        .map(|(n, d)| format!("\"{n}\": {d}"))
        .collect();
    format!(
        "{{ \"employee\": \"Test Employee\", \"weekStart\": \"2025-06-02\", \"days\": {{ {} }} }}",
        body.join(", ")
    )
}
