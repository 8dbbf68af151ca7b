use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub id: i64,
    pub user_id: i64,
    pub target_amount_ml: i32,
    pub start_date: NaiveDate,
    /// `None` while the goal is the active one.
    pub end_date: Option<NaiveDate>,
    pub achieved: bool,
}

impl Goal {
    pub fn is_active(&self) -> bool {
        self.end_date.is_none()
    }
}
