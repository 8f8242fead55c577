use timesheet::Core;
use timesheet::core::policy::{check_reason, reason_required};
use timesheet::models::{BreakKind, DayEntry, DayHours, Timesheet, Weekday};

fn compliant_day() -> DayEntry {
    DayEntry::worked("08:00", "16:30")
        .with_break(BreakKind::Meal, "12:00", "12:30")
        .with_break(BreakKind::Am, "10:00", "10:10")
        .with_break(BreakKind::Pm, "15:00", "15:10")
}

fn errors_of(day: &DayEntry) -> Vec<String> {
    Core::validate_day(day).errors
}

fn has_error(day: &DayEntry, needle: &str) -> bool {
    errors_of(day).iter().any(|e| e.contains(needle))
}

#[test]
fn test_empty_day_is_valid() {
    let report = Core::validate_day(&DayEntry::default());
    assert!(report.valid);
    assert!(report.errors.is_empty());
}

#[test]
fn test_day_off_is_always_valid() {
    let mut day = DayEntry::worked("17:00", "08:00");
    day.did_not_work = true;
    assert!(Core::validate_day(&day).valid);
}

#[test]
fn test_compliant_day_is_valid() {
    let report = Core::validate_day(&compliant_day());
    assert!(report.valid, "unexpected errors: {:?}", report.errors);
}

#[test]
fn test_time_in_without_time_out() {
    let day = DayEntry::worked("08:00", "");
    let report = Core::validate_day(&day);
    assert!(!report.valid);
    assert_eq!(
        report.errors,
        ["Time out is required when time in is provided"]
    );
}

#[test]
fn test_time_out_without_time_in() {
    assert!(has_error(
        &DayEntry::worked("", "16:00"),
        "Time in is required when time out is provided"
    ));
}

#[test]
fn test_time_in_must_precede_time_out() {
    assert!(has_error(
        &DayEntry::worked("16:00", "08:00"),
        "Time in must be before time out"
    ));
    assert!(has_error(
        &DayEntry::worked("08:00", "08:00"),
        "Time in must be before time out"
    ));
}

#[test]
fn test_malformed_time_is_reported() {
    let day = DayEntry::worked("8h", "16:00");
    assert!(has_error(&day, "Time in has an invalid time format: '8h'"));
}

#[test]
fn test_half_break_is_reported() {
    let day = compliant_day().with_break(BreakKind::Am, "10:00", "");
    assert!(has_error(
        &day,
        "AM break end time is required when start is provided"
    ));

    let day = compliant_day().with_break(BreakKind::Pm, "", "15:10");
    assert!(has_error(
        &day,
        "PM break start time is required when end is provided"
    ));
}

#[test]
fn test_break_must_be_ordered() {
    let day = compliant_day().with_break(BreakKind::Meal, "12:30", "12:00");
    assert!(has_error(&day, "Meal break start must be before its end"));
}

#[test]
fn test_break_must_be_within_shift() {
    let day = compliant_day().with_break(BreakKind::Am, "07:30", "07:40");
    assert!(has_error(&day, "AM break must be within work hours"));

    let day = compliant_day().with_break(BreakKind::Pm, "16:25", "16:35");
    assert!(has_error(&day, "PM break must be within work hours"));
}

#[test]
fn test_rest_breaks_must_not_overlap_meal() {
    let day = compliant_day().with_break(BreakKind::Am, "11:55", "12:05");
    assert!(has_error(
        &day,
        "AM break must end before the meal break starts"
    ));

    let day = compliant_day().with_break(BreakKind::Pm, "12:25", "12:35");
    assert!(has_error(
        &day,
        "PM break must start after the meal break ends"
    ));
}

#[test]
fn test_rest_break_touching_meal_is_accepted() {
    let day = compliant_day()
        .with_break(BreakKind::Am, "11:50", "12:00")
        .with_break(BreakKind::Pm, "12:30", "12:40");
    assert!(Core::validate_day(&day).valid);
}

#[test]
fn test_meal_required_after_five_hours() {
    let day = DayEntry::worked("08:00", "13:00").with_break(BreakKind::Am, "10:00", "10:10");
    assert!(Core::validate_day(&day).valid);

    let day = DayEntry::worked("08:00", "13:01").with_break(BreakKind::Am, "10:00", "10:10");
    assert!(has_error(&day, "A meal break is required"));
}

#[test]
fn test_long_shift_needs_thirty_minute_meal() {
    let day = DayEntry::worked("07:00", "17:01")
        .with_break(BreakKind::Meal, "12:00", "12:20")
        .with_break(BreakKind::Am, "09:00", "09:10")
        .with_break(BreakKind::Pm, "15:00", "15:10");
    assert_eq!(
        errors_of(&day),
        ["A meal break of at least 30 minutes is required for shifts over 10 hours"]
    );

    let day = day.with_break(BreakKind::Meal, "12:00", "12:30");
    assert!(Core::validate_day(&day).valid);
}

#[test]
fn test_rest_break_thresholds() {
    // 3h29m: nothing required
    assert!(Core::validate_day(&DayEntry::worked("08:00", "11:29")).valid);

    // 3h30m: AM break required
    assert_eq!(
        errors_of(&DayEntry::worked("08:00", "11:30")),
        ["An AM rest break is required for shifts of 3.5 hours or more"]
    );

    // 6h: meal, AM and PM all required
    let errors = errors_of(&DayEntry::worked("08:00", "14:00"));
    assert_eq!(errors.len(), 3);
    assert!(errors.iter().any(|e| e.contains("PM rest break")));
}

#[test]
fn test_errors_are_collected_not_short_circuited() {
    let day = DayEntry::worked("08:00", "17:00")
        .with_break(BreakKind::Meal, "12:30", "12:00")
        .with_break(BreakKind::Am, "07:00", "07:10");
    let errors = errors_of(&day);

    assert!(errors.iter().any(|e| e.contains("Meal break start must be before")));
    assert!(errors.iter().any(|e| e.contains("AM break must be within")));
    assert!(errors.iter().any(|e| e.contains("PM rest break is required")));
}

#[test]
fn test_invalid_day_still_classifies() {
    let day = DayEntry::worked("08:00", "18:00");
    assert!(!Core::validate_day(&day).valid);
    let h = Core::classify_day(&day, false, false);
    assert_eq!(h.total_worked, 10.0);
}

#[test]
fn test_validate_week_reports_every_day() {
    let mut sheet = Timesheet::empty();
    *sheet.day_mut(Weekday::Tuesday) = DayEntry::worked("08:00", "");

    let reports = Core::validate_week(&sheet);

    assert_eq!(reports.len(), 7);
    assert_eq!(reports[0].0, Weekday::Monday);
    assert!(reports[0].1.valid);
    assert_eq!(reports[1].0, Weekday::Tuesday);
    assert!(!reports[1].1.valid);
}

// ---------------------------
// Reason policy
// ---------------------------

#[test]
fn test_reason_required_for_premium_or_weekend() {
    let regular = DayHours {
        regular: 8.0,
        total_worked: 8.0,
        ..Default::default()
    };
    let overtime = DayHours {
        regular: 8.0,
        overtime: 1.0,
        total_worked: 9.0,
        ..Default::default()
    };
    let weekend = DayHours {
        overtime: 4.0,
        total_worked: 4.0,
        ..Default::default()
    };

    assert!(!reason_required(&regular, Weekday::Monday));
    assert!(reason_required(&overtime, Weekday::Monday));
    assert!(reason_required(&weekend, Weekday::Saturday));
    assert!(!reason_required(&DayHours::default(), Weekday::Sunday));
}

#[test]
fn test_check_reason_accepts_filled_reason() {
    let hours = DayHours {
        regular: 8.0,
        overtime: 2.0,
        total_worked: 10.0,
        ..Default::default()
    };
    let mut day = DayEntry::worked("08:00", "18:00");

    assert_eq!(
        check_reason(&day, Weekday::Wednesday, &hours).as_deref(),
        Some("A reason is required for overtime on wednesday")
    );

    day.reasons = "Quarter close".to_string();
    assert_eq!(check_reason(&day, Weekday::Wednesday, &hours), None);
}
