//! Savings chart data

use rust_decimal::Decimal;
use serde::Serialize;

use crate::estimator::EstimationResult;

/// Chart title
pub const CHART_TITLE: &str = "Cost Comparison & Savings Breakdown";

/// One bar of the comparison chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartBar {
    pub label: &'static str,
    pub amount: Decimal,
    /// RGB fill colour
    pub color: (u8, u8, u8),
}

/// Monthly cost comparison rendered as a bar chart by the front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavingsChart {
    pub title: &'static str,
    pub bars: [ChartBar; 4],
}

impl SavingsChart {
    /// Bars in display order: current cost, plan cost, uplift, net savings
    pub fn from_result(result: &EstimationResult) -> Self {
        Self {
            title: CHART_TITLE,
            bars: [
                ChartBar {
                    label: "Current Monthly Cost",
                    amount: result.current_monthly_cost,
                    color: (255, 99, 132),
                },
                ChartBar {
                    label: "AI Solution Cost",
                    amount: result.plan_price(),
                    color: (54, 162, 235),
                },
                ChartBar {
                    label: "Additional Revenue",
                    amount: result.additional_revenue,
                    color: (75, 192, 192),
                },
                ChartBar {
                    label: "Net Monthly Savings",
                    amount: result.monthly_savings,
                    color: (102, 126, 234),
                },
            ],
        }
    }

    /// Largest bar, used to scale a text rendering
    pub fn max_amount(&self) -> Decimal {
        self.bars
            .iter()
            .map(|b| b.amount)
            .fold(Decimal::ZERO, Decimal::max)
    }
}
