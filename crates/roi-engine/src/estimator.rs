//! Estimation Engine
//!
//! Pure mapping from [`EstimationInput`] to [`EstimationResult`]. All money
//! and rate arithmetic is done in [`Decimal`], so identical inputs always
//! produce identical outputs.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::catalog::{PricingCatalog, PricingTier};
use crate::input::EstimationInput;
use crate::insight::{self, StaffInsight};
use crate::narrative::{self, InsightContext, InsightMessage};
use crate::EstimateResult;

/// Share of tickets resolved without a human
pub const AUTOMATION_RATE: Decimal = dec!(0.80);

/// Relative conversion lift from faster responses
pub const CONVERSION_IMPROVEMENT: Decimal = dec!(0.25);

/// Manual handling time per ticket (15 minutes)
pub const HOURS_PER_TICKET_MANUAL: Decimal = dec!(0.25);

/// 160 productive hours a month at 4 tickets an hour
pub const BASE_TICKETS_PER_STAFF: u64 = 160 * 4;

/// Payback horizon; also the sentinel when there is no positive benefit
pub const ROI_HORIZON_MONTHS: Decimal = dec!(12);

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Derived savings, staffing and payback figures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimationResult {
    pub ai_handled_tickets: u64,
    pub human_handled_tickets: u64,
    /// Manual handling hours for the whole volume
    pub hours_per_month: Decimal,
    pub hours_saved: Decimal,
    /// Never below 1
    pub optimal_staff: u32,
    pub staff_reduction: u32,
    pub current_monthly_cost: Decimal,
    pub staff_savings: Decimal,
    /// First tier whose ceiling admits the monthly volume
    pub recommended_tier: PricingTier,
    /// Staff savings net of the plan price; may be negative
    pub monthly_savings: Decimal,
    pub annual_savings: Decimal,
    pub conversion_rate: Decimal,
    pub new_conversion_rate: Decimal,
    pub additional_revenue: Decimal,
    pub additional_annual_revenue: Decimal,
    pub total_monthly_benefit: Decimal,
    /// Months to recover the plan price, capped at 12, may be below 1
    pub roi_months: Decimal,
    /// Desired coverage window is longer than the current one
    pub coverage_upgrade: bool,
}

/// Estimate against the standard catalog.
///
/// The caller is responsible for [`EstimationInput::validate`]; see
/// [`estimate_checked`] for the validating variant.
pub fn estimate(input: &EstimationInput) -> EstimationResult {
    estimate_with_catalog(&PricingCatalog::standard(), input)
}

/// Validate, then estimate against the standard catalog
pub fn estimate_checked(input: &EstimationInput) -> EstimateResult<EstimationResult> {
    input.validate()?;
    Ok(estimate(input))
}

/// Estimate against a caller-supplied catalog
pub fn estimate_with_catalog(catalog: &PricingCatalog, input: &EstimationInput) -> EstimationResult {
    let tickets = Decimal::from(input.monthly_tickets);

    // Automation split
    let ai_handled_tickets = whole(
        (tickets * AUTOMATION_RATE).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
    );
    let human_handled_tickets = input.monthly_tickets - ai_handled_tickets;

    let hours_per_month = tickets * HOURS_PER_TICKET_MANUAL;
    let hours_saved = hours_per_month * AUTOMATION_RATE;

    // Staffing for escalations during the desired window
    let coverage_multiplier = input.desired_coverage.escalation_multiplier();
    let required = (Decimal::from(human_handled_tickets) / Decimal::from(BASE_TICKETS_PER_STAFF)
        * coverage_multiplier)
        .ceil();
    let optimal_staff = required.to_u32().unwrap_or(u32::MAX).max(1);
    let staff_reduction = input.support_staff.saturating_sub(optimal_staff);

    // Cost savings
    let current_monthly_cost = Decimal::from(input.support_staff) * input.avg_staff_cost_monthly;
    let staff_savings = Decimal::from(staff_reduction) * input.avg_staff_cost_monthly;
    let recommended_tier = catalog.recommend(input.monthly_tickets);
    let plan_price = recommended_tier.price;
    let monthly_savings = staff_savings - plan_price;
    let annual_savings = monthly_savings * MONTHS_PER_YEAR;

    // Revenue uplift
    let new_conversion_rate = input.conversion_rate * (Decimal::ONE + CONVERSION_IMPROVEMENT);
    let additional_revenue =
        tickets * input.avg_order_value * (new_conversion_rate - input.conversion_rate);
    let additional_annual_revenue = additional_revenue * MONTHS_PER_YEAR;

    // Payback
    let total_monthly_benefit = monthly_savings + additional_revenue;
    let roi_months = roi_months(plan_price, monthly_savings, total_monthly_benefit);

    tracing::debug!(
        %plan_price,
        %monthly_savings,
        %additional_revenue,
        %total_monthly_benefit,
        roi_months = %roi_months.round_dp(3),
        "ROI calculation"
    );

    EstimationResult {
        ai_handled_tickets,
        human_handled_tickets,
        hours_per_month,
        hours_saved,
        optimal_staff,
        staff_reduction,
        current_monthly_cost,
        staff_savings,
        recommended_tier: recommended_tier.clone(),
        monthly_savings,
        annual_savings,
        conversion_rate: input.conversion_rate,
        new_conversion_rate,
        additional_revenue,
        additional_annual_revenue,
        total_monthly_benefit,
        roi_months,
        coverage_upgrade: input.desired_coverage.is_upgrade_from(input.current_coverage),
    }
}

fn roi_months(price: Decimal, monthly_savings: Decimal, total_monthly_benefit: Decimal) -> Decimal {
    let months = if total_monthly_benefit > Decimal::ZERO {
        price.checked_div(total_monthly_benefit)
    } else if monthly_savings > Decimal::ZERO {
        price.checked_div(monthly_savings)
    } else {
        None
    };

    // Capped above only; sub-month payback stays fractional
    months.unwrap_or(ROI_HORIZON_MONTHS).min(ROI_HORIZON_MONTHS)
}

fn whole(value: Decimal) -> u64 {
    value.to_u64().unwrap_or_default()
}

impl EstimationResult {
    /// Monthly price of the recommended plan
    pub fn plan_price(&self) -> Decimal {
        self.recommended_tier.price
    }

    /// Which staffing narrative applies
    pub fn staff_insight(&self, input: &EstimationInput) -> Option<StaffInsight> {
        insight::classify(
            input.support_staff,
            self.optimal_staff,
            self.staff_reduction,
            self.coverage_upgrade,
        )
    }

    /// Rendered staffing narrative, if any
    pub fn insight(&self, input: &EstimationInput) -> Option<InsightMessage> {
        let kind = self.staff_insight(input)?;
        let context = InsightContext {
            current_staff: input.support_staff,
            optimal_staff: self.optimal_staff,
            staff_reduction: self.staff_reduction,
            ai_tickets: self.ai_handled_tickets,
            human_tickets: self.human_handled_tickets,
            total_tickets: input.monthly_tickets,
            current_coverage: input.current_coverage,
            desired_coverage: input.desired_coverage,
        };
        Some(narrative::render(kind, &context))
    }
}
