use crate::cli::commands::print_progress;
use crate::config::Config;
use crate::core::calculator::reminder::ReminderStatus;
use crate::core::logic::ReminderLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, water};
use crate::utils::formatting::ml2readable;
use chrono::Local;

pub fn handle(cfg: &Config, user_id: i64) -> AppResult<()> {
    let pool = open_db(&cfg.database)?;
    let (status, progress) = ReminderLogic::status(&pool, user_id, cfg, Local::now())?;

    match status {
        ReminderStatus::Disabled => info("Reminders are disabled."),
        ReminderStatus::GoalReached => success("Daily goal reached, no reminder needed."),
        ReminderStatus::Due => {
            water(format!(
                "Time to drink! {} left for today.",
                ml2readable(progress.remaining_amount_ml)
            ));
            if !cfg.quick_amounts.is_empty() {
                let amounts: Vec<String> = cfg
                    .quick_amounts
                    .iter()
                    .map(|a| format!("rhydrolog add {a}"))
                    .collect();
                info(format!("Quick add: {}", amounts.join(" | ")));
            }
        }
        ReminderStatus::NotDue { next_at } => {
            info(format!("Next reminder at {}.", next_at.format("%H:%M")))
        }
    }

    print_progress(&progress);
    Ok(())
}
