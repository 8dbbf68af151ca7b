use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::goal::GoalLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::colors::{GREEN, GREY, RESET};
use crate::utils::date;
use crate::utils::formatting::ml2readable;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config, user_id: i64) -> AppResult<()> {
    if let Commands::Goal { set, history } = cmd {
        let mut pool = open_db(&cfg.database)?;

        if let Some(target) = set {
            let id = GoalLogic::set(&mut pool, user_id, *target, date::today())?;
            success(format!(
                "Daily goal set to {} (#{})",
                ml2readable(i64::from(*target)),
                id
            ));
            return Ok(());
        }

        if *history {
            let goals = GoalLogic::history(&pool, user_id)?;
            if goals.is_empty() {
                info("No goals set yet.");
                return Ok(());
            }

            let mut table = Table::new(
                vec![
                    Column::right("ID", 4),
                    Column::right("TARGET", 8),
                    Column::left("FROM", 10),
                    Column::left("TO", 10),
                ],
                cfg.separator(),
            );
            for g in &goals {
                table.add_row(vec![
                    g.id.to_string(),
                    ml2readable(i64::from(g.target_amount_ml)),
                    g.start_date.to_string(),
                    g.end_date
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "active".to_string()),
                ]);
            }
            print!("{}", table.render());
            return Ok(());
        }

        match GoalLogic::active(&pool, user_id)? {
            Some(g) => println!(
                "Current goal: {GREEN}{}{RESET} since {}",
                ml2readable(i64::from(g.target_amount_ml)),
                g.start_date
            ),
            None => println!(
                "Current goal: {} {GREY}(default){RESET}",
                ml2readable(i64::from(cfg.default_goal_ml))
            ),
        }
    }

    Ok(())
}
