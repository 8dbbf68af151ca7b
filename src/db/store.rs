use crate::core::store::{GoalStore, IntakeStore, RecordId};
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::goal::Goal;
use crate::models::intake::IntakeRecord;
use chrono::{DateTime, Local, NaiveDate};
use rusqlite::Connection;
use std::collections::BTreeMap;

// A `rusqlite::Transaction` derefs to `Connection`, so these work inside one too.

impl IntakeStore for Connection {
    fn sum_for_day(&self, user_id: i64, date: NaiveDate) -> AppResult<Option<i64>> {
        queries::sum_for_day(self, user_id, &date)
    }

    fn append(
        &self,
        user_id: i64,
        amount_ml: i32,
        timestamp: DateTime<Local>,
    ) -> AppResult<RecordId> {
        queries::insert_intake(
            self,
            user_id,
            amount_ml,
            timestamp.timestamp_millis(),
            &timestamp.date_naive(),
        )
    }

    fn delete_one(&self, user_id: i64, id: RecordId) -> AppResult<usize> {
        queries::delete_intake(self, user_id, id)
    }

    fn delete_all_for_day(&self, user_id: i64, date: NaiveDate) -> AppResult<usize> {
        queries::delete_intakes_by_date(self, user_id, &date)
    }

    fn sums_for_range(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<BTreeMap<NaiveDate, i64>> {
        queries::sums_by_date(self, user_id, &start, &end)
    }

    fn list_for_day(&self, user_id: i64, date: NaiveDate) -> AppResult<Vec<IntakeRecord>> {
        queries::load_intakes_by_date(self, user_id, &date)
    }

    fn last_for_day(&self, user_id: i64, date: NaiveDate) -> AppResult<Option<IntakeRecord>> {
        queries::last_intake_by_date(self, user_id, &date)
    }
}

impl GoalStore for Connection {
    fn active_goal(&self, user_id: i64) -> AppResult<Option<Goal>> {
        queries::active_goal(self, user_id)
    }

    fn create_goal(
        &self,
        user_id: i64,
        target_amount_ml: i32,
        start_date: NaiveDate,
    ) -> AppResult<RecordId> {
        let closed = queries::close_active_goals(self, user_id, &start_date)?;
        if closed > 0 {
            tracing::debug!(user_id, closed, "closed previously active goals");
        }
        queries::insert_goal(self, user_id, target_amount_ml, &start_date)
    }

    fn goal_history(&self, user_id: i64) -> AppResult<Vec<Goal>> {
        queries::goal_history(self, user_id)
    }
}
