// src/export/logic.rs

use crate::db::pool::DbPool;
use crate::db::queries::load_intakes;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::IntakeExport;
use crate::ui::messages::warning;
use crate::utils::date::period_bounds;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;

/// High level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the intake records of `user_id`.
    ///
    /// - `file`: absolute output path (`~/` is expanded)
    /// - `range`: `None`, `"all"` or a period such as `YYYY`, `YYYY-MM`,
    ///   `YYYY-MM-DD`, or `start:end` of the same shape
    ///
    /// Returns the number of exported records.
    pub fn export(
        pool: &DbPool,
        user_id: i64,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(period_bounds(r).map_err(AppError::InvalidDate)?),
        };

        let rows: Vec<IntakeExport> = load_intakes(&pool.conn, user_id, bounds)?
            .iter()
            .map(IntakeExport::from)
            .collect();

        if rows.is_empty() {
            warning("No intake records found for selected range.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        tracing::info!(user_id, format = format.as_str(), count = rows.len(), "export written");
        Ok(rows.len())
    }
}
