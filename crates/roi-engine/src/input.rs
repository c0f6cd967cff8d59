//! Estimation input

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::coverage::CoverageHours;
use crate::{EstimateError, EstimateResult};

/// Upper bound of the response time window (48 hours)
pub const MAX_RESPONSE_MINUTES: u32 = 2880;

/// Largest accepted monthly ticket volume
pub const MAX_MONTHLY_TICKETS: u64 = 1_000_000_000;

/// Largest accepted staff cost or order value.
///
/// Together with [`MAX_MONTHLY_TICKETS`] this keeps every product in
/// `estimate` inside `Decimal` range.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000);

/// A prospect's support-operations metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimationInput {
    pub monthly_tickets: u64,
    /// Always minutes; unit toggling is a display concern
    pub avg_response_time_minutes: u32,
    pub support_staff: u32,
    pub avg_staff_cost_monthly: Decimal,
    /// Fraction in [0, 1]
    pub conversion_rate: Decimal,
    pub avg_order_value: Decimal,
    pub current_coverage: CoverageHours,
    pub desired_coverage: CoverageHours,
}

impl EstimationInput {
    /// Check domain constraints
    pub fn validate(&self) -> EstimateResult<()> {
        if self.monthly_tickets > MAX_MONTHLY_TICKETS {
            return Err(EstimateError::TooLarge {
                field: "monthly_tickets",
                max: MAX_MONTHLY_TICKETS.to_string(),
            });
        }
        for (field, amount) in [
            ("avg_staff_cost_monthly", self.avg_staff_cost_monthly),
            ("avg_order_value", self.avg_order_value),
        ] {
            if amount > MAX_AMOUNT {
                return Err(EstimateError::TooLarge {
                    field,
                    max: MAX_AMOUNT.to_string(),
                });
            }
        }
        if self.avg_staff_cost_monthly < Decimal::ZERO {
            return Err(EstimateError::NegativeAmount {
                field: "avg_staff_cost_monthly",
            });
        }
        if self.avg_order_value < Decimal::ZERO {
            return Err(EstimateError::NegativeAmount {
                field: "avg_order_value",
            });
        }
        if self.conversion_rate < Decimal::ZERO || self.conversion_rate > Decimal::ONE {
            return Err(EstimateError::ConversionRateOutOfRange(
                self.conversion_rate.to_string(),
            ));
        }
        if self.avg_response_time_minutes > MAX_RESPONSE_MINUTES {
            return Err(EstimateError::ResponseTimeOutOfRange {
                got: self.avg_response_time_minutes,
                max: MAX_RESPONSE_MINUTES,
            });
        }
        Ok(())
    }

    /// Set the conversion rate from a percentage, e.g. `2.5` for 2.5%
    pub fn with_conversion_percent(mut self, percent: Decimal) -> Self {
        self.conversion_rate = percent / dec!(100);
        self
    }
}

impl Default for EstimationInput {
    /// Initial calculator state
    fn default() -> Self {
        Self {
            monthly_tickets: 1000,
            avg_response_time_minutes: 30,
            support_staff: 5,
            avg_staff_cost_monthly: dec!(4000),
            conversion_rate: dec!(0.02),
            avg_order_value: dec!(100),
            current_coverage: CoverageHours::NineByFive,
            desired_coverage: CoverageHours::NineByFive,
        }
    }
}
