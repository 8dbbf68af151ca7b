use crate::errors::{AppError, AppResult};
use crate::models::goal::Goal;
use crate::models::intake::IntakeRecord;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use std::collections::BTreeMap;

const DATE_FMT: &str = "%Y-%m-%d";

fn date_to_db(date: &NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}

fn parse_db_date(idx: usize, raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(raw.to_string())),
        )
    })
}

// ------------------------------------------------
// water_intake
// ------------------------------------------------

pub fn map_intake_row(row: &Row) -> Result<IntakeRecord> {
    let date_str: String = row.get("date")?;

    Ok(IntakeRecord {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        amount_ml: row.get("amount_ml")?,
        timestamp_ms: row.get("timestamp_ms")?,
        date: parse_db_date(4, &date_str)?,
    })
}

pub fn insert_intake(
    conn: &Connection,
    user_id: i64,
    amount_ml: i32,
    timestamp_ms: i64,
    date: &NaiveDate,
) -> AppResult<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO water_intake (user_id, amount_ml, timestamp_ms, date)
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    stmt.execute(params![user_id, amount_ml, timestamp_ms, date_to_db(date)])?;
    Ok(conn.last_insert_rowid())
}

/// `None` when the user logged nothing on `date`.
pub fn sum_for_day(conn: &Connection, user_id: i64, date: &NaiveDate) -> AppResult<Option<i64>> {
    let total: Option<i64> = conn.query_row(
        "SELECT SUM(amount_ml) FROM water_intake WHERE user_id = ?1 AND date = ?2",
        params![user_id, date_to_db(date)],
        |row| row.get(0),
    )?;
    Ok(total)
}

/// Intakes of one day, newest first.
pub fn load_intakes_by_date(
    conn: &Connection,
    user_id: i64,
    date: &NaiveDate,
) -> AppResult<Vec<IntakeRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, amount_ml, timestamp_ms, date
         FROM water_intake
         WHERE user_id = ?1 AND date = ?2
         ORDER BY timestamp_ms DESC, id DESC",
    )?;

    let rows = stmt.query_map(params![user_id, date_to_db(date)], map_intake_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn last_intake_by_date(
    conn: &Connection,
    user_id: i64,
    date: &NaiveDate,
) -> AppResult<Option<IntakeRecord>> {
    let rec = conn
        .query_row(
            "SELECT id, user_id, amount_ml, timestamp_ms, date
             FROM water_intake
             WHERE user_id = ?1 AND date = ?2
             ORDER BY timestamp_ms DESC, id DESC
             LIMIT 1",
            params![user_id, date_to_db(date)],
            map_intake_row,
        )
        .optional()?;
    Ok(rec)
}

/// Intakes in chronological order; `None` bounds means the whole archive.
pub fn load_intakes(
    conn: &Connection,
    user_id: i64,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<IntakeRecord>> {
    let mut out = Vec::new();

    match bounds {
        None => {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, amount_ml, timestamp_ms, date
                 FROM water_intake
                 WHERE user_id = ?1
                 ORDER BY date ASC, timestamp_ms ASC, id ASC",
            )?;
            let rows = stmt.query_map([user_id], map_intake_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        Some((start, end)) => {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, amount_ml, timestamp_ms, date
                 FROM water_intake
                 WHERE user_id = ?1 AND date BETWEEN ?2 AND ?3
                 ORDER BY date ASC, timestamp_ms ASC, id ASC",
            )?;
            let rows = stmt.query_map(
                params![user_id, date_to_db(&start), date_to_db(&end)],
                map_intake_row,
            )?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

/// Per-day sums between `start` and `end` (inclusive). Days without intake are absent.
pub fn sums_by_date(
    conn: &Connection,
    user_id: i64,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<BTreeMap<NaiveDate, i64>> {
    let mut stmt = conn.prepare(
        "SELECT date, SUM(amount_ml) AS total
         FROM water_intake
         WHERE user_id = ?1 AND date BETWEEN ?2 AND ?3
         GROUP BY date",
    )?;

    let rows = stmt.query_map(
        params![user_id, date_to_db(start), date_to_db(end)],
        |row| {
            let raw: String = row.get(0)?;
            Ok((parse_db_date(0, &raw)?, row.get::<_, i64>(1)?))
        },
    )?;

    let mut out = BTreeMap::new();
    for r in rows {
        let (date, total) = r?;
        out.insert(date, total);
    }
    Ok(out)
}

pub fn delete_intake(conn: &Connection, user_id: i64, id: i64) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM water_intake WHERE id = ?1 AND user_id = ?2",
        params![id, user_id],
    )?;
    Ok(n)
}

pub fn delete_intakes_by_date(conn: &Connection, user_id: i64, date: &NaiveDate) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM water_intake WHERE user_id = ?1 AND date = ?2",
        params![user_id, date_to_db(date)],
    )?;
    Ok(n)
}

// ------------------------------------------------
// goals
// ------------------------------------------------

pub fn map_goal_row(row: &Row) -> Result<Goal> {
    let start_raw: String = row.get("start_date")?;
    let end_raw: Option<String> = row.get("end_date")?;

    let end_date = match end_raw {
        Some(raw) => Some(parse_db_date(4, &raw)?),
        None => None,
    };

    Ok(Goal {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        target_amount_ml: row.get("target_amount_ml")?,
        start_date: parse_db_date(3, &start_raw)?,
        end_date,
        achieved: row.get::<_, i32>("achieved")? == 1,
    })
}

pub fn insert_goal(
    conn: &Connection,
    user_id: i64,
    target_amount_ml: i32,
    start_date: &NaiveDate,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO goals (user_id, target_amount_ml, start_date, end_date, achieved)
         VALUES (?1, ?2, ?3, NULL, 0)",
        params![user_id, target_amount_ml, date_to_db(start_date)],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Close every active goal of the user. Returns how many were closed.
pub fn close_active_goals(conn: &Connection, user_id: i64, end_date: &NaiveDate) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE goals SET end_date = ?2 WHERE user_id = ?1 AND end_date IS NULL",
        params![user_id, date_to_db(end_date)],
    )?;
    Ok(n)
}

/// Active goal; if several are open, the latest start date (then id) wins.
pub fn active_goal(conn: &Connection, user_id: i64) -> AppResult<Option<Goal>> {
    let goal = conn
        .query_row(
            "SELECT id, user_id, target_amount_ml, start_date, end_date, achieved
             FROM goals
             WHERE user_id = ?1 AND end_date IS NULL
             ORDER BY start_date DESC, id DESC
             LIMIT 1",
            [user_id],
            map_goal_row,
        )
        .optional()?;
    Ok(goal)
}

pub fn goal_history(conn: &Connection, user_id: i64) -> AppResult<Vec<Goal>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, target_amount_ml, start_date, end_date, achieved
         FROM goals
         WHERE user_id = ?1
         ORDER BY start_date DESC, id DESC",
    )?;

    let rows = stmt.query_map([user_id], map_goal_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
