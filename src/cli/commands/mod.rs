pub mod add;
pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod goal;
pub mod init;
pub mod list;
pub mod log;
pub mod progress;
pub mod remind;
pub mod week;

use crate::errors::{AppError, AppResult};
use crate::models::progress::DailyProgress;
use crate::ui::messages::water;
use crate::utils::colors::{RESET, color_for_progress};
use crate::utils::date;
use crate::utils::formatting::{ml2readable, progress_bar};
use chrono::NaiveDate;

const BAR_WIDTH: usize = 20;

/// `--date` value, or today when omitted.
pub(crate) fn resolve_date(raw: &Option<String>) -> AppResult<NaiveDate> {
    match raw {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(date::today()),
    }
}

/// One-line progress summary with a colored bar.
pub(crate) fn print_progress(p: &DailyProgress) {
    let color = color_for_progress(p.percentage, p.is_goal_reached);
    water(format!(
        "{}{}{} {:>3}%  {} / {}",
        color,
        progress_bar(p.percentage, BAR_WIDTH),
        RESET,
        p.percent(),
        ml2readable(p.current_amount_ml),
        ml2readable(i64::from(p.goal_amount_ml)),
    ));
}
