use crate::cli::commands::resolve_date;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::limits::{MAX_LIMIT_ML, WARNING_LIMIT_ML};
use crate::core::store::IntakeStore;
use crate::db::initialize::open_db;
use crate::db::queries::load_intakes;
use crate::errors::{AppError, AppResult};
use crate::models::intake::IntakeRecord;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_total};
use crate::utils::date;
use crate::utils::formatting::ml2readable;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, user_id: i64) -> AppResult<()> {
    if let Commands::List { date: day, period } = cmd {
        let pool = open_db(&cfg.database)?;

        let records: Vec<IntakeRecord> = if let Some(p) = period {
            let bounds = if p.eq_ignore_ascii_case("all") {
                None
            } else {
                Some(date::period_bounds(p).map_err(AppError::InvalidDate)?)
            };
            load_intakes(&pool.conn, user_id, bounds)?
        } else {
            pool.conn.list_for_day(user_id, resolve_date(day)?)?
        };

        if records.is_empty() {
            info("No intakes found.");
            return Ok(());
        }

        print_records(&records, cfg.separator());
    }

    Ok(())
}

fn print_records(records: &[IntakeRecord], separator: char) {
    let mut table = Table::new(
        vec![
            Column::right("ID", 6),
            Column::left("DATE", 10),
            Column::left("TIME", 5),
            Column::right("AMOUNT", 8),
        ],
        separator,
    );

    // per-day totals, in the order days first appear
    let mut totals: Vec<(NaiveDate, i64)> = Vec::new();

    for r in records {
        table.add_row(vec![
            r.id.to_string(),
            r.date_str(),
            r.time_str(),
            ml2readable(i64::from(r.amount_ml)),
        ]);

        match totals.iter_mut().find(|(d, _)| *d == r.date) {
            Some((_, t)) => *t += i64::from(r.amount_ml),
            None => totals.push((r.date, i64::from(r.amount_ml))),
        }
    }

    print!("{}", table.render());
    println!();

    header("Totals");
    for (d, total) in totals {
        let color = color_for_total(total, WARNING_LIMIT_ML, MAX_LIMIT_ML);
        println!("{}  {}{}{}", d, color, ml2readable(total), RESET);
    }
}
