use crate::core::calculator::{limits, progress};
use crate::core::logic::Core;
use crate::core::store::{GoalStore, IntakeStore, RecordId};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::decision::Decision;
use crate::models::progress::DailyProgress;
use crate::utils::date::local_instant;
use crate::utils::formatting::ml2readable;
use chrono::{DateTime, Local, NaiveDate};
use rusqlite::{Connection, TransactionBehavior};

/// Result of one add attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct AddOutcome {
    pub date: NaiveDate,
    pub amount_ml: i32,
    pub decision: Decision,
    /// Set only when the intake was persisted.
    pub record_id: Option<RecordId>,
    pub previous_total_ml: i64,
    /// Progress after the attempt (unchanged when rejected).
    pub progress: DailyProgress,
}

/// Check `amount_ml` against the day's total and persist it when accepted.
///
/// The caller must make the read and the write atomic (see [`AddLogic::apply`]).
pub fn record_intake<S: IntakeStore + GoalStore>(
    store: &S,
    user_id: i64,
    amount_ml: i32,
    at: DateTime<Local>,
    default_goal_ml: i32,
) -> AppResult<AddOutcome> {
    let date = at.date_naive();
    let previous_total_ml = store.sum_for_day(user_id, date)?.unwrap_or(0);

    let decision = limits::evaluate_addition(previous_total_ml, amount_ml)?;

    let record_id = if decision.is_accepted() {
        Some(store.append(user_id, amount_ml, at)?)
    } else {
        None
    };

    let goal = Core::resolve_goal(store, user_id, default_goal_ml)?;
    let progress = progress::evaluate(store.sum_for_day(user_id, date)?, goal);

    Ok(AddOutcome {
        date,
        amount_ml,
        decision,
        record_id,
        previous_total_ml,
        progress,
    })
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Add an intake for `user_id` on `date` (wall-clock time taken from `now`).
    ///
    /// Runs inside `BEGIN IMMEDIATE`, so concurrent writers are serialized
    /// before the running total is read.
    pub fn apply(
        pool: &mut DbPool,
        user_id: i64,
        amount_ml: i32,
        date: NaiveDate,
        now: DateTime<Local>,
        default_goal_ml: i32,
    ) -> AppResult<AddOutcome> {
        limits::validate_amount(amount_ml)?;

        let at = local_instant(date, now);

        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let conn: &Connection = &tx;
        let outcome = record_intake(conn, user_id, amount_ml, at, default_goal_ml)?;

        let message = match outcome.decision {
            Decision::Rejected(_) => format!(
                "Rejected {} (day total {})",
                ml2readable(i64::from(amount_ml)),
                ml2readable(outcome.previous_total_ml)
            ),
            _ => format!(
                "Added {} for user {} (day total {})",
                ml2readable(i64::from(amount_ml)),
                user_id,
                ml2readable(outcome.progress.current_amount_ml)
            ),
        };
        ttlog(
            conn,
            outcome.decision.to_log_str(),
            &outcome.date.format("%Y-%m-%d").to_string(),
            &message,
        )?;

        tx.commit()?;

        tracing::info!(
            user_id,
            amount_ml,
            decision = ?outcome.decision,
            total_ml = outcome.progress.current_amount_ml,
            "intake evaluated"
        );

        Ok(outcome)
    }
}
