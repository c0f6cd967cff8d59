//! Estimate command

use colored::Colorize;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use supportroi_engine::presentation::format::format_currency_cents;
use supportroi_engine::presentation::{format_count, format_currency, ResultView, SavingsChart};
use supportroi_engine::{estimate_checked, EstimationInput, EstimationResult};

use crate::config::Config;
use crate::output::{self, Field, OutputFormat};
use crate::{CliResult, EstimateArgs};

const BAR_WIDTH: u32 = 30;

/// Everything an estimate prints
#[derive(Serialize)]
pub struct EstimateReport {
    pub input: EstimationInput,
    pub result: EstimationResult,
    pub view: ResultView,
}

impl EstimateReport {
    pub fn build(input: EstimationInput) -> Result<Self, supportroi_engine::EstimateError> {
        let result = estimate_checked(&input)?;
        let view = ResultView::render(&input, &result);
        Ok(Self { input, result, view })
    }
}

pub fn handle(args: &EstimateArgs, config: &Config, format: OutputFormat) -> CliResult {
    let report = EstimateReport::build(args.resolve(&config.defaults))?;
    format.print(&report, render)
}

/// Human-readable report
pub fn render(report: &EstimateReport) -> String {
    let EstimateReport { input, result, view } = report;
    let mut out = Vec::new();

    out.push(format!("{}", "Your Inputs".bold()));
    out.push(output::table([
        Field::new("Monthly tickets", format_count(input.monthly_tickets)),
        Field::new("Response time", view.current_response_time.clone()),
        Field::new("Support staff", input.support_staff.to_string()),
        Field::new("Cost per staff", format_currency_cents(input.avg_staff_cost_monthly)),
        Field::new("Conversion rate", view.current_conversion.clone()),
        Field::new("Average order value", format_currency_cents(input.avg_order_value)),
        Field::new("Current coverage", input.current_coverage.label()),
        Field::new("Desired coverage", input.desired_coverage.label()),
    ]));

    out.push(format!("{}", "Your Savings".bold()));
    out.push(output::table([
        Field::new("Total monthly benefit", view.total_monthly_benefit.clone()),
        Field::new("Monthly savings", view.monthly_savings.clone()),
        Field::new("Annual savings", view.annual_savings.clone()),
        Field::new("Additional revenue", format!("{}/month", view.additional_revenue)),
        Field::new("Additional annual revenue", view.additional_annual_revenue.clone()),
        Field::new("Time saved", format!("{}/month", view.time_saved)),
        Field::new("ROI timeline", view.roi_timeline.to_string()),
        Field::new("AI-handled tickets", format_count(result.ai_handled_tickets)),
        Field::new("Human-handled tickets", format_count(result.human_handled_tickets)),
        Field::new("Current staff", view.current_staff.clone()),
        Field::new("Optimized staff", view.optimized_staff.clone()),
        Field::new(
            "Conversion rate",
            format!("{} → {}", view.current_conversion, view.new_conversion),
        ),
    ]));

    if let Some(insight) = &view.insight {
        out.push(format!("{}\n{}", insight.headline.yellow().bold(), insight.body));
    }

    let mut plan = format!(
        "{} {} {}",
        "Recommended:".bold(),
        view.plan.name.green().bold(),
        view.plan.price
    );
    for feature in &view.plan.features {
        plan.push_str(&format!("\n  ✓ {}", feature));
    }
    out.push(plan);

    out.push(format!("{}", view.chart.title.bold()));
    out.push(output::table(chart_rows(&view.chart)));

    out.join("\n\n")
}

#[derive(Tabled)]
struct ChartRow {
    #[tabled(rename = "Item")]
    label: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "")]
    bar: String,
}

fn chart_rows(chart: &SavingsChart) -> Vec<ChartRow> {
    let max = chart.max_amount();
    chart
        .bars
        .iter()
        .map(|bar| ChartRow {
            label: bar.label,
            amount: format_currency(bar.amount),
            bar: "█".repeat(bar_len(bar.amount, max)),
        })
        .collect()
}

fn bar_len(amount: Decimal, max: Decimal) -> usize {
    if max <= Decimal::ZERO || amount <= Decimal::ZERO {
        return 0;
    }
    (amount / max * Decimal::from(BAR_WIDTH))
        .round()
        .to_usize()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_bar_len() {
        assert_eq!(bar_len(dec!(20000), dec!(20000)), 30);
        assert_eq!(bar_len(dec!(10000), dec!(20000)), 15);
        assert_eq!(bar_len(dec!(-299), dec!(20000)), 0);
        assert_eq!(bar_len(dec!(5), Decimal::ZERO), 0);
    }

    #[test]
    fn test_render_default_report() {
        colored::control::set_override(false);
        let report = EstimateReport::build(EstimationInput::default()).unwrap();
        let text = render(&report);

        assert!(text.contains("$15,701"));
        assert!(text.contains("Significant optimization possible!"));
        assert!(text.contains("Recommended: Basic Plan $299/month"));
        assert!(text.contains("Cost Comparison & Savings Breakdown"));
        assert!(text.contains("1 workday"));
    }

    #[test]
    fn test_invalid_input_rejected() {
        let input = EstimationInput {
            avg_order_value: dec!(-1),
            ..Default::default()
        };
        assert!(EstimateReport::build(input).is_err());
    }
}
