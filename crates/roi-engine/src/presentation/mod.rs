//! Presentation transforms
//!
//! Pure functions that turn an [`EstimationResult`] into the strings,
//! cards and chart series a front end shows. No rendering happens here.

pub mod chart;
pub mod format;
pub mod response_time;

use serde::{Deserialize, Serialize};

use crate::catalog::PricingTier;
use crate::estimator::EstimationResult;
use crate::input::EstimationInput;
use crate::narrative::InsightMessage;

pub use chart::{ChartBar, SavingsChart};
pub use format::{format_count, format_currency, format_percent, RoiTimeline};
pub use response_time::{format_response_time, ResponseTimeEntry, TimeUnit};

/// Recommended plan card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanCard {
    pub name: String,
    /// e.g. "$299/month"
    pub price: String,
    pub features: Vec<String>,
}

impl PlanCard {
    /// Card for the recommended tier
    pub fn from_tier(tier: &PricingTier) -> Self {
        Self {
            name: tier.name.clone(),
            price: format!("{}/month", format_currency(tier.price)),
            features: tier.features.clone(),
        }
    }
}

/// Every figure the calculator page displays for one result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub total_monthly_benefit: String,
    pub monthly_savings: String,
    pub annual_savings: String,
    pub time_saved: String,
    pub additional_revenue: String,
    pub additional_annual_revenue: String,
    pub roi_timeline: RoiTimeline,
    pub current_response_time: String,
    pub current_conversion: String,
    pub new_conversion: String,
    pub current_staff: String,
    pub optimized_staff: String,
    pub insight: Option<InsightMessage>,
    /// Recommended plan
    pub plan: PlanCard,
    pub chart: SavingsChart,
}

impl ResultView {
    /// Format every figure of `result` for display
    pub fn render(input: &EstimationInput, result: &EstimationResult) -> Self {
        Self {
            total_monthly_benefit: format_currency(result.total_monthly_benefit),
            monthly_savings: format_currency(result.monthly_savings),
            annual_savings: format_currency(result.annual_savings),
            time_saved: format::format_hours(result.hours_saved),
            additional_revenue: format_currency(result.additional_revenue),
            additional_annual_revenue: format_currency(result.additional_annual_revenue),
            roi_timeline: RoiTimeline::from_months(result.roi_months),
            current_response_time: format_response_time(input.avg_response_time_minutes),
            current_conversion: format_percent(result.conversion_rate),
            new_conversion: format_percent(result.new_conversion_rate),
            current_staff: format!("{} staff", input.support_staff),
            optimized_staff: format!("{} staff", result.optimal_staff),
            insight: result.insight(input),
            plan: PlanCard::from_tier(&result.recommended_tier),
            chart: SavingsChart::from_result(result),
        }
    }
}
