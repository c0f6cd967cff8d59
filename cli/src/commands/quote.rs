//! Quote command

use colored::Colorize;
use std::sync::Arc;

use supportroi_leads::{
    AckStatus, Acknowledgement, EmailJsSender, InMemoryLeadStore, LeadCaptureConfig,
    LeadCaptureService, LoggingSender, NotificationSender, QuoteSnapshot, SubmitLeadCommand,
};

use super::estimate::EstimateReport;
use crate::config::Config;
use crate::output::OutputFormat;
use crate::{CliResult, QuoteArgs};

pub async fn handle(args: QuoteArgs, config: &Config, format: OutputFormat) -> CliResult {
    let report = EstimateReport::build(args.estimate.resolve(&config.defaults))?;
    let snapshot = QuoteSnapshot::capture(&report.input, &report.result);

    let leads = lead_config(&args, &config.leads);
    let sender = sender(&leads, args.dry_run)?;
    let store = Arc::new(InMemoryLeadStore::new());
    let service = LeadCaptureService::new(sender, store, leads.admin_email()?);

    let command = SubmitLeadCommand {
        company_name: args.company,
        contact_name: args.contact,
        email: args.email,
        phone: args.phone,
        platform: args.platform,
        notes: args.notes,
    };
    let ack = service.submit(command, snapshot).await?;

    // Nothing outlives this process; hand retained leads to the log in full
    for lead in service.pending_follow_ups().await? {
        tracing::warn!(
            lead_id = %lead.id(),
            company = lead.company_name(),
            lead = %lead.backup_record(),
            "lead needs manual follow-up"
        );
    }

    format.print(&ack, render)
}

/// Profile settings with flag/env overrides applied
fn lead_config(args: &QuoteArgs, base: &LeadCaptureConfig) -> LeadCaptureConfig {
    let mut leads = base.clone();
    if let Some(admin) = &args.admin_email {
        leads.admin_email = admin.clone();
    }
    if args.emailjs_service_id.is_some() || args.emailjs_public_key.is_some() {
        let emailjs = leads.emailjs.get_or_insert_with(Default::default);
        if let Some(id) = &args.emailjs_service_id {
            emailjs.service_id = id.clone();
        }
        if let Some(key) = &args.emailjs_public_key {
            emailjs.public_key = key.clone();
        }
        if emailjs.endpoint.is_empty() {
            emailjs.endpoint = supportroi_leads::config::EMAILJS_ENDPOINT.into();
        }
    }
    leads
}

fn sender(
    leads: &LeadCaptureConfig,
    dry_run: bool,
) -> Result<Option<Arc<dyn NotificationSender>>, Box<dyn std::error::Error>> {
    if dry_run {
        return Ok(Some(Arc::new(LoggingSender)));
    }
    match leads.delivery() {
        Some(emailjs) => Ok(Some(Arc::new(EmailJsSender::new(emailjs.clone())?))),
        None => {
            tracing::info!("EmailJS not configured; quote requests are logged only");
            Ok(None)
        }
    }
}

fn render(ack: &Acknowledgement) -> String {
    let headline = match ack.status {
        AckStatus::Delivered => "Quote sent".green().bold(),
        AckStatus::RetainedForFollowUp => "Quote request saved".yellow().bold(),
        AckStatus::NotificationsDisabled => "Quote request received".cyan().bold(),
    };
    format!("{} (lead {})\n\n{}", headline, ack.lead_id, ack.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EstimateArgs;
    use supportroi_leads::EmailJsConfig;

    fn args() -> QuoteArgs {
        QuoteArgs {
            estimate: EstimateArgs::default(),
            company: "Acme".into(),
            contact: "Jo".into(),
            email: "jo@acme.example".into(),
            phone: None,
            platform: "Shopify".into(),
            notes: None,
            admin_email: None,
            emailjs_service_id: None,
            emailjs_public_key: None,
            dry_run: false,
        }
    }

    #[test]
    fn test_overrides_apply() {
        let base = LeadCaptureConfig {
            admin_email: "sales@acme.example".into(),
            emailjs: Some(EmailJsConfig {
                service_id: "service_file".into(),
                public_key: "pk_file".into(),
                admin_template_id: "template_admin".into(),
                customer_template_id: "template_customer".into(),
                endpoint: supportroi_leads::config::EMAILJS_ENDPOINT.into(),
            }),
        };
        let args = QuoteArgs {
            admin_email: Some("ops@acme.example".into()),
            emailjs_public_key: Some("pk_env".into()),
            ..args()
        };

        let leads = lead_config(&args, &base);
        assert_eq!(leads.admin_email, "ops@acme.example");
        let emailjs = leads.delivery().unwrap();
        assert_eq!(emailjs.service_id, "service_file");
        assert_eq!(emailjs.public_key, "pk_env");
    }

    #[test]
    fn test_partial_overrides_do_not_enable_delivery() {
        let args = QuoteArgs {
            emailjs_service_id: Some("service_env".into()),
            ..args()
        };
        let leads = lead_config(&args, &LeadCaptureConfig::default());
        assert!(leads.delivery().is_none());
        assert!(sender(&leads, false).unwrap().is_none());
        assert!(sender(&leads, true).unwrap().is_some());
    }

    #[tokio::test]
    async fn test_quote_without_delivery() {
        colored::control::set_override(false);
        let config = Config::default();
        let report = EstimateReport::build(args().estimate.resolve(&config.defaults)).unwrap();
        let service = LeadCaptureService::new(
            None,
            Arc::new(InMemoryLeadStore::new()),
            config.leads.admin_email().unwrap(),
        );
        let ack = service
            .submit(
                SubmitLeadCommand {
                    company_name: "Acme".into(),
                    contact_name: "Jo".into(),
                    email: "jo@acme.example".into(),
                    platform: "Shopify".into(),
                    ..Default::default()
                },
                QuoteSnapshot::capture(&report.input, &report.result),
            )
            .await
            .unwrap();

        let text = render(&ack);
        assert!(text.starts_with("Quote request received"));
        assert!(text.contains("Thank you Jo!"));
    }
}
