use crate::cli::commands::{print_progress, resolve_date};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::ProgressLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};
use crate::utils::formatting::ml2readable;

pub fn handle(cmd: &Commands, cfg: &Config, user_id: i64) -> AppResult<()> {
    if let Commands::Progress { date } = cmd {
        let d = resolve_date(date)?;
        let pool = open_db(&cfg.database)?;

        let p = ProgressLogic::today(&pool, user_id, d, cfg.default_goal_ml)?;

        header(format!("Progress {}", d));
        print_progress(&p);

        if p.is_goal_reached {
            success("Daily goal reached!");
        } else {
            info(format!("{} to go.", ml2readable(p.remaining_amount_ml)));
        }
    }

    Ok(())
}
