// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info};
use std::path::Path;

/// Fail unless `path` is free, `force` is set, or the user agrees to overwrite it.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    if confirm(format!("The file '{}' already exists. Overwrite?", path.display())) {
        info("Existing file will be overwritten.");
        return Ok(());
    }

    Err(AppError::Export(format!(
        "cancelled: '{}' not overwritten",
        path.display()
    )))
}
