use crate::models::progress::DailyProgress;
use chrono::{DateTime, Duration, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderStatus {
    Disabled,
    GoalReached,
    Due,
    NotDue { next_at: DateTime<Local> },
}

/// Decide whether a drink reminder should fire at `now`.
///
/// Reminders repeat every `interval_minutes` after the last intake of the day.
pub fn reminder_status(
    enabled: bool,
    interval_minutes: i64,
    last_intake: Option<DateTime<Local>>,
    now: DateTime<Local>,
    progress: &DailyProgress,
) -> ReminderStatus {
    if !enabled || interval_minutes <= 0 {
        return ReminderStatus::Disabled;
    }

    if progress.is_goal_reached {
        return ReminderStatus::GoalReached;
    }

    let Some(last) = last_intake else {
        return ReminderStatus::Due;
    };

    match Duration::try_minutes(interval_minutes).and_then(|d| last.checked_add_signed(d)) {
        Some(next_at) if now < next_at => ReminderStatus::NotDue { next_at },
        Some(_) => ReminderStatus::Due,
        // interval too large to represent
        None => ReminderStatus::Disabled,
    }
}
