//! Coverage hours and staffing multipliers

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::EstimateError;

/// Weekly support coverage window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum CoverageHours {
    /// 9 hours × 5 days
    NineByFive,
    /// 16 hours × 5 days
    SixteenByFive,
    /// 9 hours × 7 days
    NineBySeven,
    /// 16 hours × 7 days
    SixteenBySeven,
    /// 24 hours × 7 days
    AroundTheClock,
}

struct CoverageProfile {
    coverage: CoverageHours,
    hours: u32,
    /// Staff needed relative to a single 9×5 shift, in tenths
    multiplier_tenths: i64,
    label: &'static str,
}

const COVERAGE_TABLE: &[CoverageProfile] = &[
    CoverageProfile {
        coverage: CoverageHours::NineByFive,
        hours: 45,
        multiplier_tenths: 10,
        label: "9×5 business hours",
    },
    CoverageProfile {
        coverage: CoverageHours::SixteenByFive,
        hours: 80,
        multiplier_tenths: 20,
        label: "16×5 extended weekdays",
    },
    CoverageProfile {
        coverage: CoverageHours::NineBySeven,
        hours: 63,
        multiplier_tenths: 14,
        label: "9×7 daily business hours",
    },
    CoverageProfile {
        coverage: CoverageHours::SixteenBySeven,
        hours: 112,
        multiplier_tenths: 28,
        label: "16×7 extended daily",
    },
    CoverageProfile {
        coverage: CoverageHours::AroundTheClock,
        hours: 168,
        multiplier_tenths: 42,
        label: "24×7 around-the-clock",
    },
];

/// Escalation-only staffing for a 24×7 target, in tenths. AI absorbs most of
/// the overnight load, so a full multi-shift rotation is not assumed.
const AROUND_THE_CLOCK_ESCALATION_TENTHS: i64 = 25;

impl CoverageHours {
    /// Every coverage option in table order
    pub const ALL: [CoverageHours; 5] = [
        Self::NineByFive,
        Self::SixteenByFive,
        Self::NineBySeven,
        Self::SixteenBySeven,
        Self::AroundTheClock,
    ];

    fn profile(&self) -> &'static CoverageProfile {
        COVERAGE_TABLE
            .iter()
            .find(|p| p.coverage == *self)
            .unwrap_or(&COVERAGE_TABLE[0])
    }

    /// Hours per week
    pub fn hours(&self) -> u32 {
        self.profile().hours
    }

    /// Human-readable window, e.g. "9×5 business hours"
    pub fn label(&self) -> &'static str {
        self.profile().label
    }

    /// Tabulated staffing multiplier
    pub fn staffing_multiplier(&self) -> Decimal {
        Decimal::new(self.profile().multiplier_tenths, 1)
    }

    /// Multiplier used when this is the *desired* coverage.
    ///
    /// Identical to [`staffing_multiplier`](Self::staffing_multiplier)
    /// except for 24×7, which needs escalation cover only.
    pub fn escalation_multiplier(&self) -> Decimal {
        match self {
            Self::AroundTheClock => Decimal::new(AROUND_THE_CLOCK_ESCALATION_TENTHS, 1),
            _ => self.staffing_multiplier(),
        }
    }

    /// True when `self` offers more weekly hours than `current`
    pub fn is_upgrade_from(&self, current: CoverageHours) -> bool {
        self.hours() > current.hours()
    }
}

impl Default for CoverageHours {
    fn default() -> Self {
        Self::NineByFive
    }
}

impl TryFrom<u32> for CoverageHours {
    type Error = EstimateError;

    fn try_from(hours: u32) -> Result<Self, Self::Error> {
        COVERAGE_TABLE
            .iter()
            .find(|p| p.hours == hours)
            .map(|p| p.coverage)
            .ok_or(EstimateError::UnknownCoverageHours(hours))
    }
}

impl From<CoverageHours> for u32 {
    fn from(coverage: CoverageHours) -> Self {
        coverage.hours()
    }
}

impl fmt::Display for CoverageHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
