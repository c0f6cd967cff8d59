//! SupportROI CLI
//!
//! Estimate the savings and payback of AI-assisted support, and request a quote.
//!
//! # Usage
//!
//! ```bash
//! supportroi estimate --tickets 1200 --staff 6 --staff-cost 3800
//! supportroi estimate --response-time 4 --unit hours --desired-coverage 168
//! supportroi plans --format json
//! supportroi quote --company "Acme" --contact "Jo" --email jo@acme.example --platform Shopify
//! supportroi config set-admin-email sales@example.com
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use supportroi_engine::presentation::{ResponseTimeEntry, TimeUnit};
use supportroi_engine::{CoverageHours, EstimationInput};

mod commands;
mod config;
mod output;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "supportroi")]
#[command(author = "SupportROI")]
#[command(version)]
#[command(about = "SupportROI Command Line Interface", long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, short, global = true, default_value = "table")]
    format: output::OutputFormat,

    /// Profile name from config file
    #[arg(long, short, global = true, env = "SUPPORTROI_PROFILE")]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate savings, staffing and ROI
    Estimate(EstimateArgs),
    /// List pricing plans
    Plans,
    /// Request a custom quote for an estimate
    Quote(QuoteArgs),
    /// Configure CLI
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Calculator inputs. Unset flags fall back to the profile, then to the
/// calculator's initial values.
#[derive(Args, Debug, Clone, Default)]
pub struct EstimateArgs {
    /// Support tickets per month
    #[arg(long)]
    pub tickets: Option<u64>,

    /// Average first response time, in --unit
    #[arg(long)]
    pub response_time: Option<Decimal>,

    /// Unit of --response-time
    #[arg(long, value_enum, default_value = "mins")]
    pub unit: UnitArg,

    /// Support staff headcount
    #[arg(long)]
    pub staff: Option<u32>,

    /// Monthly cost per staff member
    #[arg(long)]
    pub staff_cost: Option<Decimal>,

    /// Conversion rate in percent, e.g. 2.5
    #[arg(long)]
    pub conversion: Option<Decimal>,

    /// Average order value
    #[arg(long)]
    pub order_value: Option<Decimal>,

    /// Current weekly coverage hours (45, 80, 63, 112, 168)
    #[arg(long, value_parser = parse_coverage)]
    pub current_coverage: Option<CoverageHours>,

    /// Desired weekly coverage hours (45, 80, 63, 112, 168)
    #[arg(long, value_parser = parse_coverage)]
    pub desired_coverage: Option<CoverageHours>,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum UnitArg {
    #[default]
    Mins,
    Hours,
}

impl From<UnitArg> for TimeUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Mins => TimeUnit::Minutes,
            UnitArg::Hours => TimeUnit::Hours,
        }
    }
}

impl EstimateArgs {
    /// Merge flags over profile defaults
    pub fn resolve(&self, defaults: &config::InputDefaults) -> EstimationInput {
        let base = EstimationInput::default();

        let avg_response_time_minutes = match self.response_time {
            Some(value) => ResponseTimeEntry {
                unit: self.unit.into(),
                value,
            }
            .to_minutes(),
            None => defaults
                .avg_response_time_minutes
                .unwrap_or(base.avg_response_time_minutes),
        };

        let input = EstimationInput {
            monthly_tickets: self
                .tickets
                .or(defaults.monthly_tickets)
                .unwrap_or(base.monthly_tickets),
            avg_response_time_minutes,
            support_staff: self
                .staff
                .or(defaults.support_staff)
                .unwrap_or(base.support_staff),
            avg_staff_cost_monthly: self
                .staff_cost
                .or(defaults.avg_staff_cost_monthly)
                .unwrap_or(base.avg_staff_cost_monthly),
            avg_order_value: self
                .order_value
                .or(defaults.avg_order_value)
                .unwrap_or(base.avg_order_value),
            current_coverage: self
                .current_coverage
                .or(defaults.current_coverage)
                .unwrap_or(base.current_coverage),
            desired_coverage: self
                .desired_coverage
                .or(defaults.desired_coverage)
                .unwrap_or(base.desired_coverage),
            ..base
        };

        match self.conversion.or(defaults.conversion_percent) {
            Some(percent) => input.with_conversion_percent(percent),
            None => input,
        }
    }
}

fn parse_coverage(s: &str) -> Result<CoverageHours, String> {
    let hours: u32 = s.parse().map_err(|_| format!("not a number of hours: {}", s))?;
    CoverageHours::try_from(hours).map_err(|e| e.to_string())
}

#[derive(Args, Debug, Clone)]
pub struct QuoteArgs {
    #[command(flatten)]
    pub estimate: EstimateArgs,

    #[arg(long)]
    pub company: String,

    /// Contact name
    #[arg(long)]
    pub contact: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: Option<String>,

    /// E-commerce platform, e.g. Shopify
    #[arg(long)]
    pub platform: String,

    /// Notes; defaults to a summary of the estimate
    #[arg(long)]
    pub notes: Option<String>,

    /// Sales inbox for the new-lead alert
    #[arg(long, env = "SUPPORTROI_ADMIN_EMAIL")]
    pub admin_email: Option<String>,

    #[arg(long, env = "SUPPORTROI_EMAILJS_SERVICE_ID")]
    pub emailjs_service_id: Option<String>,

    #[arg(long, env = "SUPPORTROI_EMAILJS_PUBLIC_KEY")]
    pub emailjs_public_key: Option<String>,

    /// Log the messages instead of sending them
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show configuration
    Show,
    /// Set EmailJS delivery settings
    SetEmailjs {
        #[arg(long)]
        service_id: String,
        #[arg(long)]
        public_key: String,
        #[arg(long)]
        admin_template: String,
        #[arg(long)]
        customer_template: String,
        #[arg(long)]
        endpoint: Option<String>,
    },
    /// Set the sales inbox for new-lead alerts
    SetAdminEmail { email: String },
    /// Initialize configuration
    Init,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let profile = cli.profile.as_deref();

    let config = config::Config::load(profile).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable config");
        config::Config::default()
    });

    match cli.command {
        Commands::Estimate(args) => commands::estimate::handle(&args, &config, cli.format),
        Commands::Plans => commands::plans::handle(cli.format),
        Commands::Quote(args) => commands::quote::handle(args, &config, cli.format).await,
        Commands::Config { action } => commands::config::handle(action, profile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resolve_uses_calculator_defaults() {
        let input = EstimateArgs::default().resolve(&config::InputDefaults::default());
        assert_eq!(input, EstimationInput::default());
    }

    #[test]
    fn test_resolve_precedence() {
        let defaults = config::InputDefaults {
            monthly_tickets: Some(4000),
            support_staff: Some(9),
            ..Default::default()
        };
        let args = EstimateArgs {
            tickets: Some(2500),
            response_time: Some(dec!(1.5)),
            unit: UnitArg::Hours,
            conversion: Some(dec!(3)),
            desired_coverage: Some(CoverageHours::AroundTheClock),
            ..Default::default()
        };
        let input = args.resolve(&defaults);

        assert_eq!(input.monthly_tickets, 2500);
        assert_eq!(input.support_staff, 9);
        assert_eq!(input.avg_response_time_minutes, 90);
        assert_eq!(input.conversion_rate, dec!(0.03));
        assert_eq!(input.desired_coverage, CoverageHours::AroundTheClock);
    }

    #[test]
    fn test_parse_coverage() {
        assert_eq!(parse_coverage("112"), Ok(CoverageHours::SixteenBySeven));
        assert!(parse_coverage("40").is_err());
        assert!(parse_coverage("all").is_err());
    }
}
