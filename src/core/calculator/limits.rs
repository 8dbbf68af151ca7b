//! Daily warning / maximum policy applied to every new intake.

use crate::errors::{AppError, AppResult};
use crate::models::decision::{Decision, RejectReason};

/// Soft daily ceiling: crossing it triggers a one-time notice.
pub const WARNING_LIMIT_ML: i64 = 5000;
/// Hard daily ceiling: additions that would pass it are refused.
pub const MAX_LIMIT_ML: i64 = 7000;
/// Largest amount accepted for a single entry.
pub const MAX_SINGLE_INTAKE_ML: i32 = 5000;

/// Validate a single amount, independent of the running total.
pub fn validate_amount(add_amount_ml: i32) -> AppResult<()> {
    if add_amount_ml <= 0 {
        return Err(AppError::InvalidAmount(
            "Amount must be greater than 0".into(),
        ));
    }

    if add_amount_ml > MAX_SINGLE_INTAKE_ML {
        return Err(AppError::InvalidAmount(format!(
            "Amount seems too large (max {} ml per entry)",
            MAX_SINGLE_INTAKE_ML
        )));
    }

    Ok(())
}

/// Decide whether `add_amount_ml` may be added on top of `current_total_ml`.
///
/// The warning fires only for the addition that crosses
/// [`WARNING_LIMIT_ML`], not for later additions above it.
pub fn evaluate_addition(current_total_ml: i64, add_amount_ml: i32) -> AppResult<Decision> {
    validate_amount(add_amount_ml)?;

    let new_total = current_total_ml.saturating_add(i64::from(add_amount_ml));

    if new_total > MAX_LIMIT_ML {
        return Ok(Decision::Rejected(RejectReason::MaxLimitReached));
    }

    if current_total_ml < WARNING_LIMIT_ML && new_total >= WARNING_LIMIT_ML {
        return Ok(Decision::AcceptedWithWarning);
    }

    Ok(Decision::Accepted)
}
