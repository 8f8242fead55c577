//! Formatting utilities used for CLI and export outputs.

/// Hours with two decimals, zero shown as "-".
pub fn format_hours(hours: f64) -> String {
    if hours == 0.0 {
        "-".to_string()
    } else {
        format!("{:.2}", hours)
    }
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        // e.g. +02:25 or -01:10
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // e.g. +02h 25m or -01h 10m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Wrap a long message for terminal output, continuation lines indented.
pub fn wrap_indented(text: &str, width: usize, indent: &str) -> String {
    let opts = textwrap::Options::new(width).subsequent_indent(indent);
    textwrap::fill(text, opts)
}

/// Repeat the configured separator to draw a rule line.
pub fn rule(separator: &str, width: usize) -> String {
    let sep = if separator.is_empty() { "-" } else { separator };
    sep.repeat(width)
}
