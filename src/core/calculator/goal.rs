use crate::errors::{AppError, AppResult};

pub const MIN_GOAL_ML: i32 = 500;
pub const MAX_GOAL_ML: i32 = 10_000;

/// Check a proposed daily goal before it reaches the store.
pub fn validate_goal(target_ml: i32) -> AppResult<i32> {
    if target_ml <= 0 {
        return Err(AppError::GoalInvalid("Goal must be greater than 0".into()));
    }

    if target_ml < MIN_GOAL_ML {
        return Err(AppError::GoalInvalid(format!(
            "Goal seems too low. Minimum is {}ml",
            MIN_GOAL_ML
        )));
    }

    if target_ml > MAX_GOAL_ML {
        return Err(AppError::GoalInvalid(
            "Goal seems too high. Maximum is 10L".into(),
        ));
    }

    Ok(target_ml)
}
