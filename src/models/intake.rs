use chrono::{DateTime, Local, NaiveDate, TimeZone};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeRecord {
    pub id: i64,           // ⇔ water_intake.id (INTEGER PK)
    pub user_id: i64,      // ⇔ water_intake.user_id
    pub amount_ml: i32,    // ⇔ water_intake.amount_ml (> 0)
    pub timestamp_ms: i64, // ⇔ water_intake.timestamp_ms (epoch millis)
    pub date: NaiveDate,   // ⇔ water_intake.date (TEXT "YYYY-MM-DD", local day)
}

impl IntakeRecord {
    /// Local instant of the intake, if the stored millis are representable.
    pub fn timestamp(&self) -> Option<DateTime<Local>> {
        Local.timestamp_millis_opt(self.timestamp_ms).single()
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.timestamp()
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "--:--".to_string())
    }
}
