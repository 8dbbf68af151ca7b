//! Formatting utilities used for CLI and export outputs.

/// Human readable volume: `750ml`, `1.2L` (one truncated decimal from 1000ml up).
pub fn ml2readable(ml: i64) -> String {
    if ml >= 1000 {
        format!("{}.{}L", ml / 1000, (ml % 1000) / 100)
    } else {
        format!("{}ml", ml)
    }
}

/// Fixed-width bar for a fraction in `[0, 1]`.
pub fn progress_bar(fraction: f32, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readable_volumes() {
        assert_eq!(ml2readable(0), "0ml");
        assert_eq!(ml2readable(999), "999ml");
        assert_eq!(ml2readable(1000), "1.0L");
        assert_eq!(ml2readable(1250), "1.2L");
        assert_eq!(ml2readable(7000), "7.0L");
    }

    #[test]
    fn bar_is_clamped() {
        assert_eq!(progress_bar(0.0, 4), "[░░░░]");
        assert_eq!(progress_bar(0.5, 4), "[██░░]");
        assert_eq!(progress_bar(3.0, 4), "[████]");
    }
}
