use crate::core::calculator::goal::validate_goal;
use crate::core::store::{GoalStore, RecordId};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::goal::Goal;
use chrono::NaiveDate;
use rusqlite::{Connection, TransactionBehavior};

pub struct GoalLogic;

impl GoalLogic {
    /// Validate and start a new daily goal on `today`.
    ///
    /// Any goal still active is closed in the same transaction, so a user
    /// never has more than one open goal.
    pub fn set(
        pool: &mut DbPool,
        user_id: i64,
        target_ml: i32,
        today: NaiveDate,
    ) -> AppResult<RecordId> {
        let target = validate_goal(target_ml)?;

        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let conn: &Connection = &tx;

        let id = conn.create_goal(user_id, target, today)?;
        ttlog(
            conn,
            "goal",
            &format!("#{id}"),
            &format!("Daily goal set to {} ml for user {}", target, user_id),
        )?;

        tx.commit()?;
        tracing::info!(user_id, target, id, "goal created");
        Ok(id)
    }

    pub fn active(pool: &DbPool, user_id: i64) -> AppResult<Option<Goal>> {
        pool.conn.active_goal(user_id)
    }

    pub fn history(pool: &DbPool, user_id: i64) -> AppResult<Vec<Goal>> {
        pool.conn.goal_history(user_id)
    }
}
