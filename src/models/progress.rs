/// Derived state of a single day. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyProgress {
    pub current_amount_ml: i64,
    pub goal_amount_ml: i32,
    /// Always within `[0.0, 1.0]`.
    pub percentage: f32,
    pub remaining_amount_ml: i64,
    pub is_goal_reached: bool,
}

impl DailyProgress {
    /// Percentage as a whole number, for display.
    pub fn percent(&self) -> u32 {
        (self.percentage * 100.0).round() as u32
    }
}
