use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rHydrolog
/// CLI application to track daily water intake with SQLite
#[derive(Parser)]
#[command(
    name = "rhydrolog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple hydration CLI: log water intake, track daily goals and weekly trends using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// User id the command works on (default: `default_user` from config)
    #[arg(global = true, long = "user")]
    pub user: Option<i64>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Log a water intake (ml)
    Add {
        /// Amount in millilitres
        #[arg(allow_negative_numbers = true)]
        amount: i32,

        /// Day of the intake (YYYY-MM-DD, default: today)
        #[arg(long = "date")]
        date: Option<String>,
    },

    /// Delete one intake or a whole day (default: today)
    Del {
        #[arg(long = "id", conflicts_with = "date", help = "Intake id to delete")]
        id: Option<i64>,

        #[arg(long = "date", help = "Delete every intake of this day (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List intakes of a day or a period
    List {
        #[arg(long = "date", conflicts_with = "period", help = "Day to list (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Show the progress towards the daily goal
    Progress {
        #[arg(long = "date", help = "Day to evaluate (YYYY-MM-DD, default: today)")]
        date: Option<String>,
    },

    /// Show the trailing seven days
    Week,

    /// Set the daily goal or show its history
    Goal {
        #[arg(
            long = "set",
            allow_negative_numbers = true,
            conflicts_with = "history",
            help = "New daily goal in ml"
        )]
        set: Option<i32>,

        #[arg(long = "history", help = "Show every goal, newest first")]
        history: bool,
    },

    /// Tell whether it is time to drink
    Remind,

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Compress backup as .zip")]
        compress: bool,

        #[arg(long, help = "Overwrite an existing backup without asking")]
        force: bool,
    },

    /// Export intake records
    Export {
        #[arg(long, value_enum)]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            help = "Range: YYYY, YYYY-MM, YYYY-MM-DD, start:end of the same shape, or all"
        )]
        range: Option<String>,

        #[arg(long, help = "Overwrite the output file without asking")]
        force: bool,
    },
}
