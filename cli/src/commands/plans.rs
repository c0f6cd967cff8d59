//! Plans command

use supportroi_engine::presentation::{format_count, format_currency};
use supportroi_engine::{PricingCatalog, PricingTier, TicketCeiling};
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use crate::CliResult;

#[derive(Tabled)]
struct PlanRow {
    #[tabled(rename = "Plan")]
    name: String,
    #[tabled(rename = "Key")]
    key: &'static str,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Tickets/month")]
    ceiling: String,
    #[tabled(rename = "Features")]
    features: String,
}

impl From<&PricingTier> for PlanRow {
    fn from(tier: &PricingTier) -> Self {
        Self {
            name: tier.name.clone(),
            key: tier.key.as_str(),
            price: format!("{}/month", format_currency(tier.price)),
            ceiling: match tier.max_tickets {
                TicketCeiling::Limited(max) => format!("up to {}", format_count(max)),
                TicketCeiling::Unlimited => "unlimited".into(),
            },
            features: tier.features.join("\n"),
        }
    }
}

pub fn handle(format: OutputFormat) -> CliResult {
    let catalog = PricingCatalog::standard();
    format.print(&catalog.tiers(), |tiers| {
        output::table(tiers.iter().map(PlanRow::from))
    })
}
