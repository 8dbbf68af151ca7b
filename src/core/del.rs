use crate::core::store::{IntakeStore, RecordId};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete a single intake record owned by `user_id`.
    pub fn delete_one(pool: &mut DbPool, user_id: i64, id: RecordId) -> AppResult<usize> {
        let n = pool.conn.delete_one(user_id, id)?;

        if n == 0 {
            return Err(AppError::NoIntakeFound(format!(
                "record #{} for user {}",
                id, user_id
            )));
        }

        ttlog(
            &pool.conn,
            "del",
            &format!("#{id}"),
            &format!("Deleted intake #{} for user {}", id, user_id),
        )?;
        tracing::info!(user_id, id, "intake deleted");
        Ok(n)
    }

    /// Delete every intake of `date` for `user_id`.
    pub fn delete_day(pool: &mut DbPool, user_id: i64, date: NaiveDate) -> AppResult<usize> {
        let date_str = date.format("%Y-%m-%d").to_string();
        let n = pool.conn.delete_all_for_day(user_id, date)?;

        if n == 0 {
            return Err(AppError::NoIntakeFound(format!(
                "no intakes on {} for user {}",
                date_str, user_id
            )));
        }

        ttlog(
            &pool.conn,
            "del",
            &date_str,
            &format!("Deleted {} intakes for user {}", n, user_id),
        )?;
        tracing::info!(user_id, date = %date_str, deleted = n, "day reset");
        Ok(n)
    }
}
