use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config, user_id: i64) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let pool = open_db(&cfg.database)?;
        ExportLogic::export(&pool, user_id, *format, file, range, *force)?;
    }

    Ok(())
}
