//! Response time slider mapping and unit toggle
//!
//! The slider is non-linear: positions 0-60 are minutes one-to-one, every
//! position above 60 adds another half hour, topping out at 48 hours.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use crate::input::MAX_RESPONSE_MINUTES;

/// Last linear slider position
pub const LINEAR_SLIDER_LIMIT: u32 = 60;

/// Minutes added per slider step beyond the linear range
pub const HALF_HOUR_STEP: u32 = 30;

/// Highest slider position, landing exactly on 48 hours
pub const SLIDER_MAX: u32 =
    LINEAR_SLIDER_LIMIT + (MAX_RESPONSE_MINUTES - LINEAR_SLIDER_LIMIT) / HALF_HOUR_STEP;

const MINUTES_PER_HOUR: Decimal = dec!(60);

/// Slider position to minutes
pub fn slider_to_minutes(position: u32) -> u32 {
    let position = position.min(SLIDER_MAX);
    if position <= LINEAR_SLIDER_LIMIT {
        position
    } else {
        LINEAR_SLIDER_LIMIT + (position - LINEAR_SLIDER_LIMIT) * HALF_HOUR_STEP
    }
}

/// Minutes to the nearest slider position at or below
pub fn minutes_to_slider(minutes: u32) -> u32 {
    let minutes = minutes.min(MAX_RESPONSE_MINUTES);
    if minutes <= LINEAR_SLIDER_LIMIT {
        minutes
    } else {
        LINEAR_SLIDER_LIMIT + (minutes - LINEAR_SLIDER_LIMIT) / HALF_HOUR_STEP
    }
}

/// `"0 mins"`, `"45 mins"`, `"1 hour"`, `"2 hours"`, `"1h 30m"`
pub fn format_response_time(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{} mins", minutes);
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    match (hours, mins) {
        (1, 0) => "1 hour".into(),
        (h, 0) => format!("{} hours", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

/// Unit of the manual response time field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    #[default]
    #[serde(alias = "mins")]
    Minutes,
    Hours,
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minutes => f.write_str("mins"),
            Self::Hours => f.write_str("hours"),
        }
    }
}

/// State of the manual response time field.
///
/// Replaces a page-global "current unit": callers hold the value and get a
/// new one back from [`switch_unit`](Self::switch_unit).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseTimeEntry {
    pub unit: TimeUnit,
    /// Field value in `unit`
    pub value: Decimal,
}

impl ResponseTimeEntry {
    /// Entry holding `minutes` expressed in `unit`
    pub fn from_minutes(minutes: u32, unit: TimeUnit) -> Self {
        let value = match unit {
            TimeUnit::Minutes => Decimal::from(minutes),
            TimeUnit::Hours => hours_value(Decimal::from(minutes)),
        };
        Self { unit, value }
    }

    /// Convert the field to another unit
    pub fn switch_unit(self, unit: TimeUnit) -> Self {
        let value = match (self.unit, unit) {
            (TimeUnit::Minutes, TimeUnit::Hours) => hours_value(self.value),
            (TimeUnit::Hours, TimeUnit::Minutes) => (self.value * MINUTES_PER_HOUR)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
            _ => self.value,
        };
        Self { unit, value }
    }

    /// Largest accepted field value in the current unit
    pub fn max_value(&self) -> Decimal {
        match self.unit {
            TimeUnit::Minutes => Decimal::from(MAX_RESPONSE_MINUTES),
            TimeUnit::Hours => Decimal::from(MAX_RESPONSE_MINUTES) / MINUTES_PER_HOUR,
        }
    }

    /// Field value in whole minutes, clamped to the accepted window
    pub fn to_minutes(&self) -> u32 {
        let clamped = self.value.max(Decimal::ZERO).min(self.max_value());
        let minutes = match self.unit {
            TimeUnit::Minutes => clamped,
            TimeUnit::Hours => clamped * MINUTES_PER_HOUR,
        };
        minutes
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .unwrap_or_default()
    }
}

fn hours_value(minutes: Decimal) -> Decimal {
    (minutes / MINUTES_PER_HOUR).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_bounds() {
        assert_eq!(SLIDER_MAX, 154);
        assert_eq!(slider_to_minutes(0), 0);
        assert_eq!(slider_to_minutes(60), 60);
        assert_eq!(slider_to_minutes(61), 90);
        assert_eq!(slider_to_minutes(SLIDER_MAX), MAX_RESPONSE_MINUTES);
        assert_eq!(slider_to_minutes(SLIDER_MAX + 10), MAX_RESPONSE_MINUTES);
    }

    #[test]
    fn test_minutes_to_slider_floors() {
        assert_eq!(minutes_to_slider(45), 45);
        assert_eq!(minutes_to_slider(90), 61);
        assert_eq!(minutes_to_slider(100), 61);
        assert_eq!(minutes_to_slider(2880), 154);
        for position in 0..=SLIDER_MAX {
            assert_eq!(minutes_to_slider(slider_to_minutes(position)), position);
        }
    }

    #[test]
    fn test_format_response_time() {
        assert_eq!(format_response_time(0), "0 mins");
        assert_eq!(format_response_time(30), "30 mins");
        assert_eq!(format_response_time(60), "1 hour");
        assert_eq!(format_response_time(120), "2 hours");
        assert_eq!(format_response_time(90), "1h 30m");
        assert_eq!(format_response_time(2880), "48 hours");
    }

    #[test]
    fn test_switch_unit() {
        let entry = ResponseTimeEntry::from_minutes(90, TimeUnit::Minutes);
        let hours = entry.switch_unit(TimeUnit::Hours);
        assert_eq!(hours.value, dec!(1.5));
        assert_eq!(hours.max_value(), dec!(48));

        let back = hours.switch_unit(TimeUnit::Minutes);
        assert_eq!(back.value, dec!(90));
        assert_eq!(back.max_value(), dec!(2880));
    }

    #[test]
    fn test_switch_to_same_unit_is_noop() {
        let entry = ResponseTimeEntry::from_minutes(45, TimeUnit::Minutes);
        assert_eq!(entry.switch_unit(TimeUnit::Minutes), entry);
    }

    #[test]
    fn test_hours_rounded_to_two_places() {
        let entry = ResponseTimeEntry::from_minutes(50, TimeUnit::Hours);
        assert_eq!(entry.value, dec!(0.83));
        assert_eq!(entry.to_minutes(), 50);
    }

    #[test]
    fn test_to_minutes_clamps() {
        let entry = ResponseTimeEntry {
            unit: TimeUnit::Hours,
            value: dec!(72),
        };
        assert_eq!(entry.to_minutes(), MAX_RESPONSE_MINUTES);

        let entry = ResponseTimeEntry {
            unit: TimeUnit::Minutes,
            value: dec!(-5),
        };
        assert_eq!(entry.to_minutes(), 0);
    }
}
