//! Pricing Catalog

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{EstimateError, EstimateResult};

/// Tier identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierKey {
    /// Entry tier
    Basic,
    /// Mid tier
    Pro,
    /// Unbounded tier
    Enterprise,
}

impl TierKey {
    /// Catalog key string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Pro => "pro",
            Self::Enterprise => "enterprise",
        }
    }
}

impl fmt::Display for TierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monthly ticket ceiling of a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketCeiling {
    /// At most this many tickets per month
    Limited(u64),
    /// No ceiling
    Unlimited,
}

impl TicketCeiling {
    /// Whether a monthly volume fits under this ceiling
    #[inline]
    pub fn admits(&self, monthly_tickets: u64) -> bool {
        match self {
            Self::Limited(max) => monthly_tickets <= *max,
            Self::Unlimited => true,
        }
    }
}

/// Pricing tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTier {
    pub key: TierKey,
    pub name: String,
    /// Monthly price
    pub price: Decimal,
    pub max_tickets: TicketCeiling,
    pub features: Vec<String>,
}

struct TierSeed {
    key: TierKey,
    name: &'static str,
    price: u32,
    max_tickets: TicketCeiling,
    features: &'static [&'static str],
}

const STANDARD_TIERS: &[TierSeed] = &[
    TierSeed {
        key: TierKey::Basic,
        name: "Basic Plan",
        price: 299,
        max_tickets: TicketCeiling::Limited(2000),
        features: &[
            "Up to 2,000 tickets/month",
            "24-hour response time",
            "Email support integration",
            "Basic analytics dashboard",
            "1 language support",
        ],
    },
    TierSeed {
        key: TierKey::Pro,
        name: "Professional Plan",
        price: 599,
        max_tickets: TicketCeiling::Limited(5000),
        features: &[
            "Up to 5,000 tickets/month",
            "Instant response time",
            "Multi-channel support (Email, Chat, Social)",
            "Advanced analytics & reporting",
            "3 language support",
            "CRM integration",
        ],
    },
    TierSeed {
        key: TierKey::Enterprise,
        name: "Enterprise Plan",
        price: 1299,
        max_tickets: TicketCeiling::Unlimited,
        features: &[
            "Unlimited tickets",
            "Instant response time",
            "Full omnichannel support",
            "Custom AI training",
            "Unlimited languages",
            "Dedicated account manager",
            "API access",
            "Priority support",
        ],
    },
];

/// Ordered set of tiers, ascending by ticket ceiling.
///
/// The last tier is always unbounded, so every ticket count maps to
/// exactly one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingCatalog {
    tiers: Vec<PricingTier>,
}

impl PricingCatalog {
    /// Catalog with the three published plans
    pub fn standard() -> Self {
        let tiers = STANDARD_TIERS
            .iter()
            .map(|seed| PricingTier {
                key: seed.key,
                name: seed.name.into(),
                price: Decimal::from(seed.price),
                max_tickets: seed.max_tickets,
                features: seed.features.iter().map(|f| (*f).into()).collect(),
            })
            .collect();
        Self { tiers }
    }

    /// Build a custom catalog
    pub fn new(tiers: Vec<PricingTier>) -> EstimateResult<Self> {
        let last = tiers
            .last()
            .ok_or_else(|| EstimateError::InvalidCatalog("catalog has no tiers".into()))?;

        if last.max_tickets != TicketCeiling::Unlimited {
            return Err(EstimateError::InvalidCatalog(format!(
                "last tier '{}' must have an unlimited ticket ceiling",
                last.key
            )));
        }

        for pair in tiers.windows(2) {
            if pair[0].max_tickets >= pair[1].max_tickets {
                return Err(EstimateError::InvalidCatalog(format!(
                    "tier '{}' must have a lower ticket ceiling than '{}'",
                    pair[0].key, pair[1].key
                )));
            }
        }

        if let Some(tier) = tiers.iter().find(|t| t.price < Decimal::ZERO) {
            return Err(EstimateError::InvalidCatalog(format!(
                "tier '{}' has a negative price",
                tier.key
            )));
        }

        Ok(Self { tiers })
    }

    /// First tier whose ceiling admits the monthly volume
    pub fn recommend(&self, monthly_tickets: u64) -> &PricingTier {
        self.tiers
            .iter()
            .find(|tier| tier.max_tickets.admits(monthly_tickets))
            .unwrap_or_else(|| &self.tiers[self.tiers.len() - 1])
    }

    /// Get tier by key
    pub fn get(&self, key: TierKey) -> Option<&PricingTier> {
        self.tiers.iter().find(|t| t.key == key)
    }

    /// All tiers in ascending ceiling order
    pub fn tiers(&self) -> &[PricingTier] {
        &self.tiers
    }
}

impl Default for PricingCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_catalog_prices() {
        let catalog = PricingCatalog::standard();
        let prices: Vec<_> = catalog.tiers().iter().map(|t| t.price).collect();
        assert_eq!(prices, vec![dec!(299), dec!(599), dec!(1299)]);
        assert_eq!(catalog.get(TierKey::Pro).unwrap().name, "Professional Plan");
        assert_eq!(catalog.get(TierKey::Enterprise).unwrap().features.len(), 8);
    }

    #[test]
    fn test_recommend_boundaries() {
        let catalog = PricingCatalog::standard();
        assert_eq!(catalog.recommend(0).key, TierKey::Basic);
        assert_eq!(catalog.recommend(2000).key, TierKey::Basic);
        assert_eq!(catalog.recommend(2001).key, TierKey::Pro);
        assert_eq!(catalog.recommend(5000).key, TierKey::Pro);
        assert_eq!(catalog.recommend(5001).key, TierKey::Enterprise);
        assert_eq!(catalog.recommend(u64::MAX).key, TierKey::Enterprise);
    }

    #[test]
    fn test_ceiling_ordering() {
        assert!(TicketCeiling::Limited(10) < TicketCeiling::Limited(11));
        assert!(TicketCeiling::Limited(u64::MAX) < TicketCeiling::Unlimited);
    }

    #[test]
    fn test_custom_catalog_requires_unbounded_tail() {
        let mut tiers = PricingCatalog::standard().tiers().to_vec();
        tiers.pop();
        assert!(matches!(
            PricingCatalog::new(tiers),
            Err(EstimateError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_custom_catalog_rejects_unordered() {
        let mut tiers = PricingCatalog::standard().tiers().to_vec();
        tiers.swap(0, 1);
        assert!(PricingCatalog::new(tiers).is_err());
        assert!(PricingCatalog::new(Vec::new()).is_err());
    }

    #[test]
    fn test_custom_catalog_single_tier() {
        let tier = PricingTier {
            key: TierKey::Enterprise,
            name: "Flat".into(),
            price: dec!(999),
            max_tickets: TicketCeiling::Unlimited,
            features: vec![],
        };
        let catalog = PricingCatalog::new(vec![tier]).unwrap();
        assert_eq!(catalog.recommend(0).name, "Flat");
    }
}
