//! rHydrolog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Env var holding the diagnostics filter (e.g. `RHYDROLOG_LOG=debug`).
pub const LOG_ENV: &str = "RHYDROLOG_LOG";

/// Diagnostics go to stderr so they never mix with command output.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, user_id: i64) -> AppResult<()> {
    use crate::cli::commands;

    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Add { .. } => commands::add::handle(&cli.command, cfg, user_id),
        Commands::Del { .. } => commands::del::handle(&cli.command, cfg, user_id),
        Commands::List { .. } => commands::list::handle(&cli.command, cfg, user_id),
        Commands::Progress { .. } => commands::progress::handle(&cli.command, cfg, user_id),
        Commands::Week => commands::week::handle(cfg, user_id),
        Commands::Goal { .. } => commands::goal::handle(&cli.command, cfg, user_id),
        Commands::Remind => commands::remind::handle(cfg, user_id),
        Commands::Backup { .. } => commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg, user_id),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    init_tracing();

    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command line overrides
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    let user_id = cli.user.unwrap_or(cfg.default_user);

    tracing::debug!(db = %cfg.database, user_id, "configuration resolved");

    dispatch(&cli, &cfg, user_id)
}
