use crate::config::Config;
use crate::core::logic::WeekLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{GREEN, RESET, colorize_optional};
use crate::utils::date;
use crate::utils::formatting::ml2readable;
use crate::utils::table::{Column, Table};

pub fn handle(cfg: &Config, user_id: i64) -> AppResult<()> {
    let pool = open_db(&cfg.database)?;
    let stats = WeekLogic::week(&pool, user_id, date::today(), cfg.default_goal_ml)?;

    header(format!(
        "Last 7 days (goal {})",
        ml2readable(i64::from(stats.goal_ml))
    ));

    let mut table = Table::new(
        vec![
            Column::left("DAY", 3),
            Column::left("DATE", 10),
            Column::right("AMOUNT", 8),
            Column::left("GOAL", 4),
        ],
        cfg.separator(),
    );

    for d in &stats.days {
        table.add_row(vec![
            d.label.clone(),
            d.date.to_string(),
            ml2readable(d.amount_ml),
            if d.goal_met { "✔".to_string() } else { String::new() },
        ]);
    }

    print!("{}", table.render());
    println!();

    println!("Total:   {}", colorize_optional(&ml2readable(stats.total)));
    println!("Average: {}", colorize_optional(&ml2readable(stats.average)));
    println!("Best:    {}", colorize_optional(&ml2readable(stats.best_day)));
    if stats.streak > 0 {
        println!("Streak:  {GREEN}{} day(s){RESET}", stats.streak);
    } else {
        println!("Streak:  {}", colorize_optional("--"));
    }

    Ok(())
}
