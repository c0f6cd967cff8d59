//! Property tests for the estimation engine

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use supportroi_engine::{classify, estimate, CoverageHours, EstimationInput, StaffInsight};

fn coverage() -> impl Strategy<Value = CoverageHours> {
    prop::sample::select(CoverageHours::ALL.to_vec())
}

prop_compose! {
    fn any_input()(
        monthly_tickets in 0u64..200_000,
        avg_response_time_minutes in 0u32..=2880,
        support_staff in 0u32..200,
        staff_cost_cents in 0i64..2_000_000,
        conversion_bp in 0i64..=10_000,
        order_value_cents in 0i64..1_000_000,
        current_coverage in coverage(),
        desired_coverage in coverage(),
    ) -> EstimationInput {
        EstimationInput {
            monthly_tickets,
            avg_response_time_minutes,
            support_staff,
            avg_staff_cost_monthly: Decimal::new(staff_cost_cents, 2),
            conversion_rate: Decimal::new(conversion_bp, 4),
            avg_order_value: Decimal::new(order_value_cents, 2),
            current_coverage,
            desired_coverage,
        }
    }
}

proptest! {
    #[test]
    fn ticket_split_is_exhaustive(input in any_input()) {
        let result = estimate(&input);
        prop_assert_eq!(
            result.ai_handled_tickets + result.human_handled_tickets,
            input.monthly_tickets
        );
    }

    #[test]
    fn staffing_invariants(input in any_input()) {
        let result = estimate(&input);
        prop_assert!(result.optimal_staff >= 1);
        prop_assert!(result.staff_reduction <= input.support_staff);
        prop_assert_eq!(
            result.staff_reduction,
            input.support_staff.saturating_sub(result.optimal_staff)
        );
    }

    #[test]
    fn roi_is_capped(input in any_input()) {
        let result = estimate(&input);
        prop_assert!(result.roi_months <= dec!(12));
        if result.total_monthly_benefit <= Decimal::ZERO && result.monthly_savings <= Decimal::ZERO {
            prop_assert_eq!(result.roi_months, dec!(12));
        }
    }

    #[test]
    fn tier_never_gets_cheaper(input in any_input(), extra in 0u64..50_000) {
        let smaller = estimate(&input);
        let larger = estimate(&EstimationInput {
            monthly_tickets: input.monthly_tickets + extra,
            ..input.clone()
        });
        prop_assert!(larger.recommended_tier.price >= smaller.recommended_tier.price);
        prop_assert!(larger.recommended_tier.max_tickets >= smaller.recommended_tier.max_tickets);
    }

    #[test]
    fn estimate_is_idempotent(input in any_input()) {
        prop_assert_eq!(estimate(&input), estimate(&input));
    }

    #[test]
    fn larger_desired_coverage_selects_upgrade_narrative(
        input in any_input(),
        desired in coverage(),
    ) {
        prop_assume!(desired.hours() > input.current_coverage.hours());
        prop_assume!(input.support_staff > 0);

        let result = estimate(&EstimationInput { desired_coverage: desired, ..input.clone() });
        let insight = result.staff_insight(&input).expect("staff present");

        let no_upgrade_branch = matches!(insight, StaffInsight::ReduceWithoutUpgrade { .. });
        prop_assert!(insight.is_coverage_upgrade());
        prop_assert!(!no_upgrade_branch);
    }
}

#[test]
fn upgrade_switch_for_fixed_staffing_numbers() {
    for staff in 1u32..8 {
        for optimal in 1u32..4 {
            let reduction = staff.saturating_sub(optimal);
            let without = classify(staff, optimal, reduction, false).unwrap();
            let with = classify(staff, optimal, reduction, true).unwrap();
            assert!(!without.is_coverage_upgrade());
            assert!(with.is_coverage_upgrade());
        }
    }
}

#[test]
fn zero_tickets_still_staffs_one_person() {
    let input = EstimationInput {
        monthly_tickets: 0,
        ..Default::default()
    };
    let result = estimate(&input);
    assert_eq!(result.optimal_staff, 1);
    assert_eq!(result.recommended_tier.key.as_str(), "basic");
    assert_eq!(result.additional_revenue, Decimal::ZERO);
}
