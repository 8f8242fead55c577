use predicates::str::contains;
use std::fs;

mod common;
use common::{OFF_DAY, STANDARD_DAY, standard_week_json, temp_path, ts, week_json, write_sheet};
use timesheet::export::ExportLogic;
use timesheet::input::load_timesheet;

#[test]
fn test_export_csv_rows_and_totals() {
    let sheet = write_sheet("export_csv", "json", &standard_week_json());
    let out = temp_path("export_csv_out", "csv");

    ts("export_csv")
        .args(["export", &sheet, "--out", &out, "--format", "csv"])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("csv written");
    let lines: Vec<&str> = content.lines().collect();

    // header + 7 days + totals
    assert_eq!(lines.len(), 9);
    assert!(lines[0].starts_with("day,date,time_in,time_out,regular,overtime,double_time"));
    assert!(lines[1].starts_with("monday,2025-06-02,08:00,16:30,8.0,0.0,0.0,8.0,false"));
    assert!(lines[7].starts_with("sunday,2025-06-08,,,0.0,0.0,0.0,0.0,false"));
    assert!(lines[8].starts_with("total,,,,40.0,0.0,0.0,40.0,false"));
}

#[test]
fn test_export_json_document() {
    let json = week_json(&[
        STANDARD_DAY,
        STANDARD_DAY,
        STANDARD_DAY,
        STANDARD_DAY,
        r#"{ "timeIn": "08:00", "timeOut": "21:00", "outOfTownHours": 1, "outOfTownMinutes": 30 }"#,
        OFF_DAY,
        OFF_DAY,
    ]);
    let sheet = write_sheet("export_json", "json", &json);
    let out = temp_path("export_json_out", "json");

    ts("export_json")
        .args(["export", &sheet, "--out", &out, "--format", "json"])
        .assert()
        .success();

    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("json written")).expect("json");

    assert_eq!(doc["employee"], "Test Employee");
    assert_eq!(doc["days"].as_array().map(|a| a.len()), Some(7));
    assert_eq!(doc["days"][4]["day"], "friday");
    assert_eq!(doc["days"][4]["double_time"], 1.0);
    assert_eq!(doc["days"][4]["out_of_town"], "01:30");
    assert_eq!(doc["totals"]["regular"], 40.0);
    assert_eq!(doc["totals"]["overtime"], 4.0);
    assert_eq!(doc["totals"]["double_time"], 1.0);
    assert_eq!(doc["totals"]["total"], 45.0);
    assert_eq!(doc["totals"]["out_of_town_minutes"], 90);
}

#[test]
fn test_export_requires_absolute_path() {
    let sheet = write_sheet("export_relative", "json", &standard_week_json());

    ts("export_relative")
        .args(["export", &sheet, "--out", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("Output file path must be absolute"));
}

#[test]
fn test_export_force_overwrites() {
    let sheet = write_sheet("export_force", "json", &standard_week_json());
    let out = temp_path("export_force_out", "csv");
    fs::write(&out, "old").expect("seed output");

    ts("export_force")
        .args(["export", &sheet, "--out", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("csv written");
    assert!(content.starts_with("day,"));
}

#[test]
fn test_export_existing_file_declined() {
    let sheet = write_sheet("export_declined", "json", &standard_week_json());
    let out = temp_path("export_declined_out", "csv");
    fs::write(&out, "old").expect("seed output");

    ts("export_declined")
        .args(["export", &sheet, "--out", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Export cancelled"));

    assert_eq!(fs::read_to_string(&out).expect("kept"), "old");
}

#[test]
fn test_build_flattens_classified_week() {
    let path = write_sheet("export_build", "json", &standard_week_json());
    let mut sheet = load_timesheet(std::path::Path::new(&path)).expect("load");

    let week = ExportLogic::build(&mut sheet, 0);

    assert_eq!(week.days.len(), 7);
    assert_eq!(week.days[0].date, "2025-06-02");
    assert_eq!(week.days[0].regular, 8.0);
    assert!(week.days.iter().all(|d| !d.seventh_day));
    assert_eq!(week.totals.total, 40.0);
}

#[test]
fn test_export_day_total_stays_at_hundredths() {
    let json = week_json(&[
        r#"{ "timeIn": "08:00", "timeOut": "17:07" }"#,
        OFF_DAY,
        OFF_DAY,
        OFF_DAY,
        OFF_DAY,
        OFF_DAY,
        OFF_DAY,
    ]);
    let path = write_sheet("export_hundredths", "json", &json);
    let mut sheet = load_timesheet(std::path::Path::new(&path)).expect("load");

    let week = ExportLogic::build(&mut sheet, 0);

    assert_eq!(week.days[0].regular, 8.0);
    assert_eq!(week.days[0].overtime, 1.12);
    assert_eq!(week.days[0].total_worked, 9.12);

    let out = temp_path("export_hundredths_out", "json");
    ts("export_hundredths")
        .args(["export", &path, "--out", &out, "--format", "json"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("json written");
    assert!(content.contains("\"total_worked\": 9.12,"));
    assert!(!content.contains("9.120000000000001"));
}
