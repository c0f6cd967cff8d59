//! Display formatting

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workdays counted as one month of payback
pub const WORKDAYS_PER_MONTH: Decimal = dec!(22);

/// Round to the nearest integer, ties toward positive infinity
pub fn round_half_up(value: Decimal) -> Decimal {
    (value + dec!(0.5)).floor()
}

fn group_thousands(value: i128) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `8000` → `"8,000"`
pub fn format_count(value: u64) -> String {
    group_thousands(i128::from(value))
}

/// Whole-dollar amount, e.g. `"$15,701"` or `"$-299"`
pub fn format_currency(amount: Decimal) -> String {
    let whole = round_half_up(amount).to_i128().unwrap_or_default();
    format!("${}", group_thousands(whole))
}

/// Two-decimal amount, e.g. `"$100.00"`
pub fn format_currency_cents(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let whole = rounded.trunc().to_i128().unwrap_or_default();
    let cents = (rounded.fract().abs() * Decimal::ONE_HUNDRED).to_u32().unwrap_or_default();
    let sign = if rounded < Decimal::ZERO && whole == 0 { "-" } else { "" };
    format!("${}{}.{:02}", sign, group_thousands(whole), cents)
}

/// Fraction as a one-decimal percentage, `0.025` → `"2.5%"`
pub fn format_percent(fraction: Decimal) -> String {
    let pct = (fraction * Decimal::ONE_HUNDRED).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1}%", pct)
}

/// `200` → `"200 hours"`
pub fn format_hours(hours: Decimal) -> String {
    let whole = round_half_up(hours).to_i128().unwrap_or_default();
    format!("{} hours", group_thousands(whole))
}

/// Payback period as shown to the prospect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "lowercase")]
pub enum RoiTimeline {
    /// Sub-month payback
    Workdays(u32),
    /// Whole months, rounded up
    Months(u32),
}

impl RoiTimeline {
    /// Convert fractional months; below one month is shown in workdays
    pub fn from_months(roi_months: Decimal) -> Self {
        if roi_months < Decimal::ONE {
            let days = (roi_months * WORKDAYS_PER_MONTH).ceil();
            Self::Workdays(days.to_u32().unwrap_or_default())
        } else {
            Self::Months(roi_months.ceil().to_u32().unwrap_or_default())
        }
    }
}

impl fmt::Display for RoiTimeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Workdays(1) => write!(f, "1 workday"),
            Self::Workdays(n) => write!(f, "{} workdays", n),
            Self::Months(1) => write!(f, "1 month"),
            Self::Months(n) => write!(f, "{} months", n),
        }
    }
}
