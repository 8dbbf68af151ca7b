use crate::models::progress::DailyProgress;

/// Goal used when no valid goal can be resolved for the user.
pub const DEFAULT_GOAL_ML: i32 = 2000;

/// Replace a non-positive goal with [`DEFAULT_GOAL_ML`].
pub fn effective_goal(goal_ml: i32) -> i32 {
    if goal_ml > 0 { goal_ml } else { DEFAULT_GOAL_ML }
}

/// Derive the progress of a day from its intake sum and the goal.
///
/// `today_total_ml` is `None` when nothing was logged yet.
pub fn evaluate(today_total_ml: Option<i64>, goal_ml: i32) -> DailyProgress {
    let goal = effective_goal(goal_ml);
    let current = today_total_ml.unwrap_or(0);

    let percentage = (current as f64 / f64::from(goal)).clamp(0.0, 1.0) as f32;
    let remaining = (i64::from(goal) - current).max(0);

    DailyProgress {
        current_amount_ml: current,
        goal_amount_ml: goal,
        percentage,
        remaining_amount_ml: remaining,
        is_goal_reached: current >= i64::from(goal),
    }
}
