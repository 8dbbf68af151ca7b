use crate::cli::commands::{print_progress, resolve_date};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::calculator::limits::{MAX_LIMIT_ML, WARNING_LIMIT_ML};
use crate::db::initialize::open_db;
use crate::errors::{AppError, AppResult};
use crate::models::decision::Decision;
use crate::ui::messages::{success, warning};
use crate::utils::formatting::ml2readable;
use chrono::Local;

/// Log a water intake.
pub fn handle(cmd: &Commands, cfg: &Config, user_id: i64) -> AppResult<()> {
    if let Commands::Add { amount, date } = cmd {
        let d = resolve_date(date)?;

        let mut pool = open_db(&cfg.database)?;

        let outcome = AddLogic::apply(
            &mut pool,
            user_id,
            *amount,
            d,
            Local::now(),
            cfg.default_goal_ml,
        )?;

        match outcome.decision {
            Decision::Rejected(_) => {
                return Err(AppError::MaxLimitReached {
                    current: outcome.previous_total_ml,
                    attempted: *amount,
                    limit: MAX_LIMIT_ML,
                });
            }
            Decision::Accepted | Decision::AcceptedWithWarning => {
                success(format!(
                    "Added {} on {} (#{})",
                    ml2readable(i64::from(*amount)),
                    outcome.date,
                    outcome.record_id.unwrap_or_default()
                ));
            }
        }

        if outcome.decision == Decision::AcceptedWithWarning {
            warning(format!(
                "You have drunk more than {} today. The daily maximum is {}.",
                ml2readable(WARNING_LIMIT_ML),
                ml2readable(MAX_LIMIT_ML)
            ));
        }

        print_progress(&outcome.progress);

        if outcome.progress.is_goal_reached {
            success("Daily goal reached!");
        }
    }

    Ok(())
}
