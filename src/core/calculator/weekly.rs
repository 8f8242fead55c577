//! Weekly aggregation: tracker + classifier over the seven days.

use crate::core::calculator::{classifier, streak};
use crate::models::{Timesheet, WeekTotals};
use crate::utils::time::round2;
use tracing::debug;

/// Classify every day of the week and write the results back onto the
/// timesheet. Recomputing from the same raw times yields the same output.
pub fn compute_week_with_carry(sheet: &mut Timesheet, prior_streak: u32) -> WeekTotals {
    let contexts = streak::track_week(sheet, prior_streak);

    let mut regular = 0.0;
    let mut overtime = 0.0;
    let mut double_time = 0.0;
    let mut out_of_town_minutes = 0;

    for ctx in &contexts {
        let entry = sheet.day_mut(ctx.day);
        entry.clear_computed();

        if entry.did_not_work {
            continue;
        }

        let hours =
            classifier::classify_day(entry, ctx.is_weekend, ctx.is_seventh_consecutive_day);

        entry.total_regular_hours = hours.regular;
        entry.total_overtime_hours = hours.overtime;
        entry.total_double_time_hours = hours.double_time;
        entry.is_seventh_consecutive_day = ctx.is_seventh_consecutive_day;

        regular += hours.regular;
        overtime += hours.overtime;
        double_time += hours.double_time;
        out_of_town_minutes += entry.out_of_town_total_minutes();
    }

    let regular = round2(regular);
    let overtime = round2(overtime);
    let double_time = round2(double_time);

    sheet.total_regular_hours = regular;
    sheet.total_overtime_hours = overtime;
    sheet.total_double_time_hours = double_time;

    let totals = WeekTotals {
        regular,
        overtime,
        double_time,
        total: round2(regular + overtime + double_time),
        trailing_streak: streak::trailing_streak(&contexts),
        out_of_town_minutes,
    };

    debug!(
        regular = totals.regular,
        overtime = totals.overtime,
        double_time = totals.double_time,
        trailing_streak = totals.trailing_streak,
        "week computed"
    );

    totals
}

pub fn compute_week(sheet: &mut Timesheet) -> WeekTotals {
    compute_week_with_carry(sheet, 0)
}
