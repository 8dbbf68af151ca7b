//! Storage seams used by the ledger logic.
//!
//! The SQLite implementations live in `db::store`; tests can plug in
//! anything that honours the same contracts.

use crate::errors::AppResult;
use crate::models::goal::Goal;
use crate::models::intake::IntakeRecord;
use chrono::{DateTime, Local, NaiveDate};
use std::collections::BTreeMap;

pub type RecordId = i64;

pub trait IntakeStore {
    /// Sum of the user's intakes on `date`, `None` if there are none.
    fn sum_for_day(&self, user_id: i64, date: NaiveDate) -> AppResult<Option<i64>>;

    /// Persist one intake. The day bucket is the local date of `timestamp`.
    fn append(&self, user_id: i64, amount_ml: i32, timestamp: DateTime<Local>)
    -> AppResult<RecordId>;

    fn delete_one(&self, user_id: i64, id: RecordId) -> AppResult<usize>;

    fn delete_all_for_day(&self, user_id: i64, date: NaiveDate) -> AppResult<usize>;

    /// Per-day sums for `start..=end`; days without intake are absent.
    fn sums_for_range(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<BTreeMap<NaiveDate, i64>>;

    /// Intakes of `date`, newest first.
    fn list_for_day(&self, user_id: i64, date: NaiveDate) -> AppResult<Vec<IntakeRecord>>;

    fn last_for_day(&self, user_id: i64, date: NaiveDate) -> AppResult<Option<IntakeRecord>>;
}

pub trait GoalStore {
    fn active_goal(&self, user_id: i64) -> AppResult<Option<Goal>>;

    /// Start a new goal on `start_date`, closing any goal still active.
    fn create_goal(&self, user_id: i64, target_amount_ml: i32, start_date: NaiveDate)
    -> AppResult<RecordId>;

    /// All goals, most recent first.
    fn goal_history(&self, user_id: i64) -> AppResult<Vec<Goal>>;
}
