// src/export/model.rs

use crate::models::intake::IntakeRecord;
use serde::Serialize;

/// Flat row used by CSV and JSON exports.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct IntakeExport {
    pub id: i64,
    pub user_id: i64,
    pub date: String,
    pub time: String,
    pub amount_ml: i32,
    pub timestamp_ms: i64,
}

impl From<&IntakeRecord> for IntakeExport {
    fn from(r: &IntakeRecord) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            date: r.date_str(),
            time: r.time_str(),
            amount_ml: r.amount_ml,
            timestamp_ms: r.timestamp_ms,
        }
    }
}
