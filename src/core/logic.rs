use crate::core::calculator::reminder::{ReminderStatus, reminder_status};
use crate::core::calculator::weekly::{aggregate, week_start};
use crate::core::calculator::{progress, progress::effective_goal};
use crate::config::Config;
use crate::core::store::{GoalStore, IntakeStore};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::progress::DailyProgress;
use crate::models::weekly::WeeklyStats;
use chrono::{DateTime, Local, NaiveDate};

pub struct Core;

impl Core {
    /// Target of the user's active goal, or `default_goal_ml` when there is none.
    pub fn resolve_goal<S: GoalStore>(
        store: &S,
        user_id: i64,
        default_goal_ml: i32,
    ) -> AppResult<i32> {
        let goal = store
            .active_goal(user_id)?
            .map(|g| g.target_amount_ml)
            .unwrap_or(default_goal_ml);
        Ok(effective_goal(goal))
    }

    pub fn daily_progress<S: IntakeStore + GoalStore>(
        store: &S,
        user_id: i64,
        date: NaiveDate,
        default_goal_ml: i32,
    ) -> AppResult<DailyProgress> {
        let total = store.sum_for_day(user_id, date)?;
        let goal = Self::resolve_goal(store, user_id, default_goal_ml)?;
        Ok(progress::evaluate(total, goal))
    }

    pub fn weekly_stats<S: IntakeStore + GoalStore>(
        store: &S,
        user_id: i64,
        today: NaiveDate,
        default_goal_ml: i32,
    ) -> AppResult<WeeklyStats> {
        let sums = store.sums_for_range(user_id, week_start(today), today)?;
        let goal = Self::resolve_goal(store, user_id, default_goal_ml)?;
        Ok(aggregate(&sums, goal, today))
    }

    pub fn reminder<S: IntakeStore + GoalStore>(
        store: &S,
        user_id: i64,
        enabled: bool,
        interval_minutes: i64,
        default_goal_ml: i32,
        now: DateTime<Local>,
    ) -> AppResult<(ReminderStatus, DailyProgress)> {
        let today = now.date_naive();
        let progress = Self::daily_progress(store, user_id, today, default_goal_ml)?;
        let last = store
            .last_for_day(user_id, today)?
            .and_then(|rec| rec.timestamp());

        let status = reminder_status(enabled, interval_minutes, last, now, &progress);
        Ok((status, progress))
    }
}

/// Today's (or any day's) progress for the `progress` command.
pub struct ProgressLogic;

impl ProgressLogic {
    pub fn today(
        pool: &DbPool,
        user_id: i64,
        date: NaiveDate,
        default_goal_ml: i32,
    ) -> AppResult<DailyProgress> {
        Core::daily_progress(&pool.conn, user_id, date, default_goal_ml)
    }
}

pub struct WeekLogic;

impl WeekLogic {
    /// Trailing seven days ending on `today`.
    pub fn week(
        pool: &DbPool,
        user_id: i64,
        today: NaiveDate,
        default_goal_ml: i32,
    ) -> AppResult<WeeklyStats> {
        Core::weekly_stats(&pool.conn, user_id, today, default_goal_ml)
    }
}

pub struct ReminderLogic;

impl ReminderLogic {
    pub fn status(
        pool: &DbPool,
        user_id: i64,
        cfg: &Config,
        now: DateTime<Local>,
    ) -> AppResult<(ReminderStatus, DailyProgress)> {
        Core::reminder(
            &pool.conn,
            user_id,
            cfg.notifications_enabled,
            cfg.reminder_interval_minutes,
            cfg.default_goal_ml,
            now,
        )
    }
}
