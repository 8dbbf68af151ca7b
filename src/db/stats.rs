use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::formatting::ml2readable;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension};
use std::fs;

fn line(label: &str, value: impl std::fmt::Display) {
    println!("{CYAN}• {label}:{RESET} {value}");
}

fn first_or_last_date(conn: &Connection, order: &str) -> rusqlite::Result<Option<String>> {
    conn.query_row(
        &format!("SELECT date FROM water_intake ORDER BY date {order} LIMIT 1"),
        [],
        |row| row.get(0),
    )
    .optional()
}

/// Summary of the database file and its contents for `db --info`.
pub fn print_db_info(pool: &DbPool, db_path: &str) -> rusqlite::Result<()> {
    let conn = &pool.conn;
    println!();

    let size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    line("File", format!("{YELLOW}{db_path}{RESET}"));
    line("Size", format!("{:.2} MB", size as f64 / (1024.0 * 1024.0)));

    let (count, total_ml): (i64, i64) = conn.query_row(
        "SELECT COUNT(*), IFNULL(SUM(amount_ml), 0) FROM water_intake",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    line(
        "Total intakes",
        format!("{GREEN}{count}{RESET} ({})", ml2readable(total_ml)),
    );

    let goals: i64 = conn.query_row("SELECT COUNT(*) FROM goals", [], |row| row.get(0))?;
    line("Goals", goals);

    let mut stmt = conn.prepare(
        "SELECT user_id, COUNT(*), SUM(amount_ml)
         FROM water_intake
         GROUP BY user_id
         ORDER BY user_id",
    )?;
    let users = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, i64>(1)?,
            row.get::<_, i64>(2)?,
        ))
    })?;
    line("Users", "");
    for u in users {
        let (user, n, ml) = u?;
        println!("    #{user}: {n} intakes, {}", ml2readable(ml));
    }

    let first = first_or_last_date(conn, "ASC")?;
    let last = first_or_last_date(conn, "DESC")?;
    let none = || format!("{GREY}--{RESET}");

    line("Date range", "");
    println!("    from: {}", first.clone().unwrap_or_else(none));
    println!("    to:   {}", last.clone().unwrap_or_else(none));

    if let (Some(f), Some(l)) = (first, last)
        && let (Ok(d1), Ok(d2)) = (
            NaiveDate::parse_from_str(&f, "%Y-%m-%d"),
            NaiveDate::parse_from_str(&l, "%Y-%m-%d"),
        )
    {
        let days = (d2 - d1).num_days() + 1;
        line("Average per day", ml2readable(total_ml / days.max(1)));
    }

    println!();
    Ok(())
}
