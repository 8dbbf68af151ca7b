use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result, Transaction, TransactionBehavior};

/// One schema step. Applied steps are recorded in the `log` table as
/// `migration_applied` rows, keyed by `version`.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250901_0001_create_water_intake",
        description: "Created water_intake table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS water_intake (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id       INTEGER NOT NULL,
            amount_ml     INTEGER NOT NULL CHECK(amount_ml > 0),
            timestamp_ms  INTEGER NOT NULL,
            date          TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_intake_user_date ON water_intake(user_id, date);
        "#,
    },
    Migration {
        version: "20250901_0002_create_goals",
        description: "Created goals table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS goals (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id           INTEGER NOT NULL,
            target_amount_ml  INTEGER NOT NULL CHECK(target_amount_ml > 0),
            start_date        TEXT NOT NULL,
            end_date          TEXT,
            achieved          INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_goals_user_start ON goals(user_id, start_date);
        "#,
    },
    Migration {
        version: "20251002_0004_single_active_goal",
        description: "Closed duplicate active goals (latest start date wins)",
        sql: r#"
        UPDATE goals
        SET end_date = start_date
        WHERE end_date IS NULL
          AND EXISTS (
              SELECT 1 FROM goals newer
              WHERE newer.user_id = goals.user_id
                AND newer.end_date IS NULL
                AND (newer.start_date > goals.start_date
                     OR (newer.start_date = goals.start_date AND newer.id > goals.id))
          );
        "#,
    },
];

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Apply `m` under the write lock. Returns `false` if another connection
/// applied it first.
fn apply(conn: &Connection, m: &Migration) -> Result<bool> {
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;

    if is_applied(&tx, m.version)? {
        return Ok(false);
    }

    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tx.commit()?;
    Ok(true)
}

/// List the versions that are not applied yet.
pub fn pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
///
/// Called by `db::initialize::init_db()`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        if !apply(conn, m)? {
            continue;
        }
        tracing::info!(version = m.version, "migration applied");
        success(format!("Migration applied: {} → {}", m.version, m.description));
    }

    Ok(())
}
