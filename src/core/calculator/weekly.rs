use crate::core::calculator::progress::effective_goal;
use crate::models::weekly::{DayTotal, WeeklyStats};
use chrono::{Days, NaiveDate};
use std::collections::BTreeMap;

pub const WEEK_DAYS: u64 = 7;

/// First day of the trailing week that ends on `today`.
pub fn week_start(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_days(Days::new(WEEK_DAYS - 1))
        .unwrap_or(NaiveDate::MIN)
}

/// Build the seven-day series ending on `today` and its summary.
///
/// Days missing from `daily_sums` count as 0. The average truncates.
pub fn aggregate(
    daily_sums: &BTreeMap<NaiveDate, i64>,
    goal_ml: i32,
    today: NaiveDate,
) -> WeeklyStats {
    let goal = i64::from(effective_goal(goal_ml));

    let days: Vec<DayTotal> = week_start(today)
        .iter_days()
        .take_while(|d| *d <= today)
        .map(|date| {
            let amount_ml = daily_sums.get(&date).copied().unwrap_or(0);
            DayTotal {
                date,
                label: date.format("%a").to_string(),
                amount_ml,
                goal_met: amount_ml >= goal,
            }
        })
        .collect();

    let total: i64 = days.iter().map(|d| d.amount_ml).sum();
    let best_day = days.iter().map(|d| d.amount_ml).max().unwrap_or(0);

    // walk back from today, stop at the first miss
    let streak = days.iter().rev().take_while(|d| d.goal_met).count() as u32;

    WeeklyStats {
        days,
        goal_ml: goal as i32,
        total,
        average: total / WEEK_DAYS as i64,
        best_day,
        streak,
    }
}
