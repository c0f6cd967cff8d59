//! SupportROI Estimation Engine
//!
//! Maps a prospect's support-operations metrics to cost savings, revenue
//! uplift, staffing and payback figures, and recommends a pricing tier.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                         ESTIMATION ENGINE                            │
//! │                                                                      │
//! │   EstimationInput ─► estimate() ─► EstimationResult                  │
//! │          │                │                 │                        │
//! │          ▼                ▼                 ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌───────────┐ │
//! │  │   Coverage   │  │   Pricing    │  │    Staff     │  │ Present-  │ │
//! │  │    Table     │  │   Catalog    │  │   Insight    │  │  ation    │ │
//! │  └──────────────┘  └──────────────┘  └──────────────┘  └───────────┘ │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is pure: no I/O, no shared state. Every call recomputes the
//! whole result from its input.

pub mod catalog;
pub mod coverage;
pub mod estimator;
pub mod input;
pub mod insight;
pub mod narrative;
pub mod presentation;

use thiserror::Error;

pub use catalog::{PricingCatalog, PricingTier, TicketCeiling, TierKey};
pub use coverage::CoverageHours;
pub use estimator::{estimate, estimate_checked, EstimationResult};
pub use input::EstimationInput;
pub use insight::{classify, StaffInsight};
pub use narrative::{InsightContext, InsightMessage};

/// Estimation error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// A currency field was negative
    #[error("{field} must not be negative")]
    NegativeAmount {
        /// Offending field
        field: &'static str,
    },
    /// A count or currency field beyond what the engine computes with
    #[error("{field} must be at most {max}")]
    TooLarge {
        /// Offending field
        field: &'static str,
        /// Upper bound
        max: String,
    },
    /// Conversion rate outside [0, 1]
    #[error("conversion rate must be a fraction between 0 and 1, got {0}")]
    ConversionRateOutOfRange(String),
    /// Response time beyond the 48 hour window
    #[error("average response time must be at most {max} minutes, got {got}")]
    ResponseTimeOutOfRange {
        /// Minutes supplied
        got: u32,
        /// Upper bound in minutes
        max: u32,
    },
    /// Coverage hours outside the enumerated set
    #[error("unsupported coverage hours per week: {0} (expected 45, 63, 80, 112 or 168)")]
    UnknownCoverageHours(u32),
    /// A custom catalog would leave some ticket volume without a tier
    #[error("invalid pricing catalog: {0}")]
    InvalidCatalog(String),
}

/// Result type for the estimation engine
pub type EstimateResult<T> = Result<T, EstimateError>;
