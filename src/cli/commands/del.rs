use crate::cli::commands::resolve_date;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config, user_id: i64) -> AppResult<()> {
    if let Commands::Del { id, date: date_str, yes } = cmd {
        let day = resolve_date(date_str)?;

        let prompt = if let Some(i) = id {
            format!("Delete intake #{}? This action is irreversible.", i)
        } else {
            format!(
                "Delete ALL intakes for {}? This action is irreversible.",
                day
            )
        };

        if !*yes && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = open_db(&cfg.database)?;

        if let Some(i) = id {
            DeleteLogic::delete_one(&mut pool, user_id, *i)?;
            success(format!("Intake #{} has been deleted.", i));
        } else {
            let n = DeleteLogic::delete_day(&mut pool, user_id, day)?;
            success(format!("{} intakes for {} have been deleted.", n, day));
        }
    }

    Ok(())
}
