use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTotal {
    pub date: NaiveDate,
    /// Short weekday name ("Mon", "Tue", ...).
    pub label: String,
    pub amount_ml: i64,
    pub goal_met: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyStats {
    /// Seven entries, oldest first, the last one is today.
    pub days: Vec<DayTotal>,
    pub goal_ml: i32,
    pub total: i64,
    /// `total / 7`, truncated.
    pub average: i64,
    pub best_day: i64,
    /// Consecutive days ending today with intake >= goal.
    pub streak: u32,
}
