use crate::core::calculator::progress::DEFAULT_GOAL_ML;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

/// Overrides the configuration directory (tests, portable installs).
pub const HOME_ENV: &str = "RHYDROLOG_HOME";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_user")]
    pub default_user: i64,
    #[serde(default = "default_goal_ml")]
    pub default_goal_ml: i32,
    #[serde(default = "default_notifications")]
    pub notifications_enabled: bool,
    #[serde(default = "default_reminder_interval")]
    pub reminder_interval_minutes: i64,
    #[serde(default = "default_quick_amounts")]
    pub quick_amounts: Vec<i32>,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_user() -> i64 {
    1
}
fn default_goal_ml() -> i32 {
    DEFAULT_GOAL_ML
}
fn default_notifications() -> bool {
    true
}
fn default_reminder_interval() -> i64 {
    60
}
fn default_quick_amounts() -> Vec<i32> {
    vec![250, 500, 750]
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file().to_string_lossy().to_string())
    }
}

impl Config {
    fn with_database(database: String) -> Self {
        Self {
            database,
            default_user: default_user(),
            default_goal_ml: default_goal_ml(),
            notifications_enabled: default_notifications(),
            reminder_interval_minutes: default_reminder_interval(),
            quick_amounts: default_quick_amounts(),
            separator_char: default_separator_char(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(custom) = env::var(HOME_ENV)
            && !custom.trim().is_empty()
        {
            return PathBuf::from(custom);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rhydrolog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rhydrolog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rhydrolog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rhydrolog.sqlite")
    }

    /// First character of `separator_char`, `-` when empty.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::create_dir_all(Self::config_dir()).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was configured.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = crate::utils::path::expand_tilde(&name);
            if p.is_absolute() { p } else { dir.join(p) }
        } else {
            Self::database_file()
        };

        let config = Self::with_database(db_path.to_string_lossy().to_string());

        // Write config file
        if !is_test {
            config.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            if let Some(parent) = db_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::File::create(&db_path)
                .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", db_path.display())))?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config.database)
    }
}
