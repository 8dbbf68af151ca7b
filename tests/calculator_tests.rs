use chrono::{Duration, Local, NaiveDate, TimeZone};
use proptest::prelude::*;
use rhydrolog::core::calculator::goal::validate_goal;
use rhydrolog::core::calculator::limits::{
    MAX_LIMIT_ML, WARNING_LIMIT_ML, evaluate_addition, validate_amount,
};
use rhydrolog::core::calculator::progress::{DEFAULT_GOAL_ML, evaluate};
use rhydrolog::core::calculator::reminder::{ReminderStatus, reminder_status};
use rhydrolog::core::calculator::weekly::aggregate;
use rhydrolog::errors::AppError;
use rhydrolog::models::decision::{Decision, RejectReason};
use std::collections::BTreeMap;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

// ---------------------------------------------------------------------------
// progress
// ---------------------------------------------------------------------------

#[test]
fn test_progress_half_way() {
    let p = evaluate(Some(1000), 2000);
    assert_eq!(p.current_amount_ml, 1000);
    assert_eq!(p.goal_amount_ml, 2000);
    assert!((p.percentage - 0.5).abs() < f32::EPSILON);
    assert_eq!(p.remaining_amount_ml, 1000);
    assert!(!p.is_goal_reached);
}

#[test]
fn test_progress_nothing_logged() {
    let p = evaluate(None, 2000);
    assert_eq!(p.current_amount_ml, 0);
    assert_eq!(p.percentage, 0.0);
    assert_eq!(p.remaining_amount_ml, 2000);
    assert!(!p.is_goal_reached);
}

#[test]
fn test_progress_over_goal_is_clamped() {
    let p = evaluate(Some(3000), 2000);
    assert_eq!(p.percentage, 1.0);
    assert_eq!(p.remaining_amount_ml, 0);
    assert!(p.is_goal_reached);
    assert_eq!(p.percent(), 100);
}

#[test]
fn test_progress_exact_goal_is_reached() {
    let p = evaluate(Some(2000), 2000);
    assert!(p.is_goal_reached);
    assert_eq!(p.remaining_amount_ml, 0);
}

#[test]
fn test_progress_invalid_goal_uses_default() {
    for goal in [0, -10] {
        let p = evaluate(Some(500), goal);
        assert_eq!(p.goal_amount_ml, DEFAULT_GOAL_ML);
        assert!((p.percentage - 0.25).abs() < f32::EPSILON);
        assert_eq!(p.remaining_amount_ml, 1500);
    }
}

// ---------------------------------------------------------------------------
// limits
// ---------------------------------------------------------------------------

#[test]
fn test_limits_below_warning() {
    assert_eq!(evaluate_addition(1000, 500).ok(), Some(Decision::Accepted));
}

#[test]
fn test_limits_crossing_warning() {
    assert_eq!(
        evaluate_addition(4800, 300).ok(),
        Some(Decision::AcceptedWithWarning)
    );
}

#[test]
fn test_limits_landing_on_warning_warns() {
    assert_eq!(
        evaluate_addition(4500, 500).ok(),
        Some(Decision::AcceptedWithWarning)
    );
}

#[test]
fn test_limits_already_above_warning_does_not_warn_again() {
    assert_eq!(evaluate_addition(5200, 300).ok(), Some(Decision::Accepted));
}

#[test]
fn test_limits_exact_max_is_accepted() {
    assert_eq!(evaluate_addition(6500, 500).ok(), Some(Decision::Accepted));
}

#[test]
fn test_limits_huge_total_does_not_overflow() {
    assert_eq!(
        evaluate_addition(i64::MAX, 1).ok(),
        Some(Decision::Rejected(RejectReason::MaxLimitReached))
    );
}

#[test]
fn test_limits_over_max_is_rejected() {
    assert_eq!(
        evaluate_addition(6800, 300).ok(),
        Some(Decision::Rejected(RejectReason::MaxLimitReached))
    );
}

#[test]
fn test_limits_invalid_amounts() {
    for amount in [0, -250, 5001] {
        assert!(matches!(
            evaluate_addition(0, amount),
            Err(AppError::InvalidAmount(_))
        ));
    }
    assert!(validate_amount(5000).is_ok());
}

#[test]
fn test_limits_messages() {
    let err = validate_amount(0).unwrap_err().to_string();
    assert!(err.contains("Amount must be greater than 0"));

    let err = validate_amount(6000).unwrap_err().to_string();
    assert!(err.contains("Amount seems too large (max 5000 ml per entry)"));
}

// ---------------------------------------------------------------------------
// weekly
// ---------------------------------------------------------------------------

#[test]
fn test_weekly_missing_days_are_zero() {
    let today = d("2025-09-07");
    let stats = aggregate(&BTreeMap::new(), 2000, today);

    assert_eq!(stats.days.len(), 7);
    assert!(stats.days.iter().all(|x| x.amount_ml == 0 && !x.goal_met));
    assert_eq!(stats.total, 0);
    assert_eq!(stats.average, 0);
    assert_eq!(stats.best_day, 0);
    assert_eq!(stats.streak, 0);
}

#[test]
fn test_weekly_order_and_labels() {
    let today = d("2025-09-07");
    let stats = aggregate(&BTreeMap::new(), 2000, today);

    assert_eq!(stats.days[0].date, d("2025-09-01"));
    assert_eq!(stats.days[0].label, "Mon");
    assert_eq!(stats.days[6].date, today);
    assert_eq!(stats.days[6].label, "Sun");
}

#[test]
fn test_weekly_summary_values() {
    let today = d("2025-09-07");
    let mut sums = BTreeMap::new();
    sums.insert(d("2025-09-01"), 1000);
    sums.insert(d("2025-09-03"), 2500);
    sums.insert(d("2025-09-06"), 2000);
    sums.insert(d("2025-09-07"), 2100);
    // outside the window, ignored
    sums.insert(d("2025-08-31"), 9999);

    let stats = aggregate(&sums, 2000, today);

    assert_eq!(stats.total, 7600);
    assert_eq!(stats.average, 7600 / 7);
    assert_eq!(stats.best_day, 2500);
    assert_eq!(stats.streak, 2);
    assert!(stats.days[2].goal_met);
    assert!(!stats.days[0].goal_met);
}

#[test]
fn test_weekly_streak_stops_when_today_is_missed() {
    let today = d("2025-09-07");
    let mut sums = BTreeMap::new();
    for day in 1..=6 {
        sums.insert(d(&format!("2025-09-0{day}")), 3000);
    }
    sums.insert(today, 100);

    let stats = aggregate(&sums, 2000, today);
    assert_eq!(stats.streak, 0);
}

#[test]
fn test_weekly_full_streak() {
    let today = d("2025-09-07");
    let mut sums = BTreeMap::new();
    for day in 1..=7 {
        sums.insert(d(&format!("2025-09-0{day}")), 2000);
    }

    let stats = aggregate(&sums, 2000, today);
    assert_eq!(stats.streak, 7);
    assert_eq!(stats.average, 2000);
}

#[test]
fn test_weekly_streak_breaks_at_missed_day() {
    let today = d("2025-09-07");
    let mut sums = BTreeMap::new();
    sums.insert(d("2025-09-05"), 2500);
    sums.insert(d("2025-09-06"), 1800);
    sums.insert(today, 2200);

    let stats = aggregate(&sums, 2000, today);
    assert_eq!(stats.streak, 1);
    assert_eq!(stats.total, 6500);
    assert_eq!(stats.best_day, 2500);
}

#[test]
fn test_weekly_invalid_goal_uses_default() {
    let today = d("2025-09-07");
    let mut sums = BTreeMap::new();
    sums.insert(today, 2000);

    let stats = aggregate(&sums, 0, today);
    assert_eq!(stats.goal_ml, DEFAULT_GOAL_ML);
    assert_eq!(stats.streak, 1);
}

// ---------------------------------------------------------------------------
// goal
// ---------------------------------------------------------------------------

#[test]
fn test_goal_validation() {
    assert_eq!(validate_goal(2500).ok(), Some(2500));
    assert_eq!(validate_goal(500).ok(), Some(500));
    assert_eq!(validate_goal(10_000).ok(), Some(10_000));

    let msg = |v: i32| validate_goal(v).unwrap_err().to_string();
    assert!(msg(0).contains("Goal must be greater than 0"));
    assert!(msg(499).contains("Goal seems too low. Minimum is 500ml"));
    assert!(msg(10_001).contains("Goal seems too high. Maximum is 10L"));
    assert!(matches!(validate_goal(-1), Err(AppError::GoalInvalid(_))));
}

// ---------------------------------------------------------------------------
// reminder
// ---------------------------------------------------------------------------

#[test]
fn test_reminder_states() {
    let now = Local
        .with_ymd_and_hms(2025, 9, 1, 12, 0, 0)
        .single()
        .expect("unambiguous local time");
    let open = evaluate(Some(500), 2000);
    let done = evaluate(Some(2000), 2000);

    assert_eq!(
        reminder_status(false, 60, None, now, &open),
        ReminderStatus::Disabled
    );
    assert_eq!(
        reminder_status(true, 0, None, now, &open),
        ReminderStatus::Disabled
    );
    assert_eq!(
        reminder_status(true, 60, None, now, &done),
        ReminderStatus::GoalReached
    );
    assert_eq!(
        reminder_status(true, 60, None, now, &open),
        ReminderStatus::Due
    );

    let recent = now - Duration::minutes(20);
    assert_eq!(
        reminder_status(true, 60, Some(recent), now, &open),
        ReminderStatus::NotDue {
            next_at: recent + Duration::minutes(60)
        }
    );

    let old = now - Duration::minutes(60);
    assert_eq!(
        reminder_status(true, 60, Some(old), now, &open),
        ReminderStatus::Due
    );
}

// ---------------------------------------------------------------------------
// properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_progress_is_clamped(total in proptest::option::of(0i64..100_000), goal in -5000i32..20_000) {
        let p = evaluate(total, goal);
        prop_assert!((0.0..=1.0).contains(&p.percentage));
        prop_assert!(p.remaining_amount_ml >= 0);
        prop_assert!(p.goal_amount_ml > 0);
        prop_assert_eq!(p.is_goal_reached, p.current_amount_ml >= i64::from(p.goal_amount_ml));
    }

    #[test]
    fn prop_limit_policy_never_passes_max(amounts in proptest::collection::vec(1i32..=5000, 0..40)) {
        let mut total = 0i64;
        let mut warnings = 0;

        for a in amounts {
            match evaluate_addition(total, a) {
                Ok(Decision::Accepted) => total += i64::from(a),
                Ok(Decision::AcceptedWithWarning) => {
                    warnings += 1;
                    total += i64::from(a);
                }
                Ok(Decision::Rejected(_)) => prop_assert!(total + i64::from(a) > MAX_LIMIT_ML),
                Err(e) => prop_assert!(false, "unexpected error: {}", e),
            }
            prop_assert!(total <= MAX_LIMIT_ML);
        }

        prop_assert!(warnings <= 1);
        if warnings == 1 {
            prop_assert!(total >= WARNING_LIMIT_ML);
        }
    }

    #[test]
    fn prop_weekly_total_ignores_insert_order(values in proptest::collection::vec(0i64..6000, 7)) {
        let today = d("2025-09-07");
        let days: Vec<NaiveDate> = (1..=7).map(|i| d(&format!("2025-09-0{i}"))).collect();

        let forward: BTreeMap<_, _> = days.iter().copied().zip(values.iter().copied()).collect();
        let backward: BTreeMap<_, _> = days.iter().rev().copied()
            .zip(values.iter().rev().copied())
            .collect();

        let a = aggregate(&forward, 2000, today);
        let b = aggregate(&backward, 2000, today);

        prop_assert_eq!(a.total, values.iter().sum::<i64>());
        prop_assert_eq!(a, b);
    }
}
