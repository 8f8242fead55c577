use crate::cli::commands::open_sheet;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::breaks;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::input::save_timesheet;
use crate::models::{DayEntry, Timesheet, WeekTotals, Weekday};
use crate::ui::messages::{header, success};
use crate::utils::colors::{BOLD, GREY, Premium, color_for_bucket, colorize_optional, paint};
use crate::utils::date::week_label;
use crate::utils::formatting::rule;
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};
use crate::utils::{format_hours, mins2readable};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        file,
        carry,
        week,
        details,
        write,
    } = cmd
    {
        let mut sheet = open_sheet(file, week.as_deref())?;
        let totals = Core::compute_week_with_carry(&mut sheet, *carry);

        print_week(&sheet, &totals, cfg);

        if *details {
            print_breaks(&sheet);
        }

        if *write {
            save_timesheet(&expand_tilde(file), &sheet)?;
            success(format!("Computed hours written to {}", file));
        }
    }
    Ok(())
}

fn print_week(sheet: &Timesheet, totals: &WeekTotals, cfg: &Config) {
    let title = match sheet.week_start {
        Some(monday) => format!("Week {}", week_label(monday)),
        None => "Timesheet week".to_string(),
    };
    header(&title);

    let color = cfg.colors_enabled();

    if !sheet.employee.is_empty() {
        println!("Employee: {}\n", paint(&sheet.employee, BOLD, color));
    }

    let mut table = Table::new(vec![
        Column::new("Day", 10),
        Column::new("In", 6),
        Column::new("Out", 6),
        Column::new("Regular", 8),
        Column::new("Overtime", 8),
        Column::new("Double", 8),
        Column::new("7th", 4),
        Column::new("Out of town", 11),
    ]);

    for day in Weekday::ALL {
        let Some(entry) = sheet.day(day) else {
            continue;
        };
        table.add_row(day_row(day, entry, cfg));
    }

    let sep = rule(&cfg.separator_char, table.width());
    print!("{}", table.render());
    println!("{sep}");

    println!(
        "Total      regular {} | overtime {} | double time {} | worked {}",
        paint(
            &format!("{:.2}", totals.regular),
            color_for_bucket(totals.regular, Premium::Regular),
            color
        ),
        paint(
            &format!("{:.2}", totals.overtime),
            color_for_bucket(totals.overtime, Premium::Overtime),
            color
        ),
        paint(
            &format!("{:.2}", totals.double_time),
            color_for_bucket(totals.double_time, Premium::DoubleTime),
            color
        ),
        paint(&format!("{:.2}", totals.total), BOLD, color),
    );

    if totals.out_of_town_minutes > 0 {
        println!(
            "Out of town: {}",
            mins2readable(totals.out_of_town_minutes, false, false)
        );
    }
    println!("Trailing streak: {} day(s)", totals.trailing_streak);
}

fn day_row(day: Weekday, entry: &DayEntry, cfg: &Config) -> Vec<String> {
    let color = cfg.colors_enabled();
    let name = if cfg.show_weekend_marker && day.is_weekend() {
        format!("{}*", day.key())
    } else {
        day.key().to_string()
    };

    if entry.did_not_work {
        return vec![
            name,
            paint("off", GREY, color),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        ];
    }

    let bucket = |hours: f64, premium: Premium| {
        paint(&format_hours(hours), color_for_bucket(hours, premium), color)
    };

    let oot = entry.out_of_town_total_minutes();

    vec![
        name,
        colorize_optional(or_dash(&entry.time_in), color),
        colorize_optional(or_dash(&entry.time_out), color),
        bucket(entry.total_regular_hours, Premium::Regular),
        bucket(entry.total_overtime_hours, Premium::Overtime),
        bucket(entry.total_double_time_hours, Premium::DoubleTime),
        if entry.is_seventh_consecutive_day {
            "yes".to_string()
        } else {
            String::new()
        },
        if oot > 0 {
            mins2readable(oot, false, true)
        } else {
            String::new()
        },
    ]
}

fn or_dash(s: &str) -> &str {
    if s.trim().is_empty() { "--:--" } else { s }
}

fn print_breaks(sheet: &Timesheet) {
    println!("\nBreaks:");
    for day in Weekday::ALL {
        let Some(entry) = sheet.day(day) else {
            continue;
        };
        if !entry.is_worked() {
            continue;
        }

        let parts: Vec<String> = breaks::evaluate_all(entry)
            .iter()
            .filter(|b| b.minutes > 0)
            .map(|b| {
                format!(
                    "{} {}m{}",
                    b.kind.label(),
                    b.minutes,
                    if b.deducted { " (deducted)" } else { " (paid)" }
                )
            })
            .collect();

        let text = if parts.is_empty() {
            "no breaks".to_string()
        } else {
            parts.join(", ")
        };
        println!("- {:<10} {}", day.key(), text);
    }
}
