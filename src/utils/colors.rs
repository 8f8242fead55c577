/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";

/// Colour of an hour bucket:
/// double time → red, overtime → yellow, regular → green, zero → grey
pub fn color_for_bucket(hours: f64, premium: Premium) -> &'static str {
    if hours == 0.0 {
        return GREY;
    }
    match premium {
        Premium::Regular => GREEN,
        Premium::Overtime => YELLOW,
        Premium::DoubleTime => RED,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Premium {
    Regular,
    Overtime,
    DoubleTime,
}

/// Wrap `value` in `color` when colours are enabled.
pub fn paint(value: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Greys out empty placeholders ("", "-", "--:--").
pub fn colorize_optional(value: &str, enabled: bool) -> String {
    let v = value.trim();
    if v.is_empty() || v == "-" || v == "--:--" {
        paint(value, GREY, enabled)
    } else {
        value.to_string()
    }
}
