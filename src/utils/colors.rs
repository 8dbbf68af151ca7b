/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Progress color:
/// goal reached → green
/// half way or more → cyan
/// below → yellow
pub fn color_for_progress(fraction: f32, reached: bool) -> &'static str {
    if reached {
        GREEN
    } else if fraction >= 0.5 {
        CYAN
    } else {
        YELLOW
    }
}

/// Daily total color against the warning / max limits.
pub fn color_for_total(total_ml: i64, warning_ml: i64, max_ml: i64) -> &'static str {
    if total_ml >= max_ml {
        RED
    } else if total_ml >= warning_ml {
        YELLOW
    } else {
        RESET
    }
}

/// Grey out empty values ("0ml", "--").
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" || value.trim() == "0ml" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
