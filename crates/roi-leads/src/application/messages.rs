//! Notification message composition

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{Email, Lead};

/// Which template a message is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageTemplate {
    /// New-lead alert to the sales inbox
    AdminAlert,
    /// Quote summary to the prospect
    CustomerQuote,
}

/// Template parameters plus recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationMessage {
    pub template: MessageTemplate,
    pub recipient: Email,
    pub params: BTreeMap<&'static str, String>,
}

impl NotificationMessage {
    /// Alert for the sales team with everything the prospect entered
    pub fn admin_alert(lead: &Lead, admin: &Email) -> Self {
        let snap = lead.snapshot();
        let params = BTreeMap::from([
            ("to_email", admin.to_string()),
            ("from_name", lead.contact_name().to_string()),
            ("company_name", lead.company_name().to_string()),
            ("contact_email", lead.email().to_string()),
            ("contact_phone", lead.phone().to_string()),
            ("platform", lead.platform().to_string()),
            ("monthly_tickets", snap.monthly_tickets.clone()),
            ("support_staff", snap.support_staff.clone()),
            ("optimized_staff", snap.optimized_staff.clone()),
            ("current_response_time", snap.current_response_time.clone()),
            ("current_conversion", snap.current_conversion.clone()),
            ("new_conversion", snap.new_conversion.clone()),
            ("monthly_savings", snap.monthly_savings.clone()),
            ("annual_savings", snap.annual_savings.clone()),
            ("recommended_plan", snap.recommended_plan.clone()),
            ("plan_price", snap.plan_price.clone()),
            ("notes", lead.notes().to_string()),
            ("timestamp", lead.captured_at().to_rfc3339()),
        ]);

        Self {
            template: MessageTemplate::AdminAlert,
            recipient: admin.clone(),
            params,
        }
    }

    /// Quote for the prospect
    pub fn customer_quote(lead: &Lead, admin: &Email) -> Self {
        let snap = lead.snapshot();
        let params = BTreeMap::from([
            ("to_email", lead.email().to_string()),
            ("to_name", lead.contact_name().to_string()),
            ("company_name", lead.company_name().to_string()),
            ("monthly_savings", snap.monthly_savings.clone()),
            ("annual_savings", snap.annual_savings.clone()),
            ("recommended_plan", snap.recommended_plan.clone()),
            ("plan_price", snap.plan_price.clone()),
            ("from_email", admin.to_string()),
        ]);

        Self {
            template: MessageTemplate::CustomerQuote,
            recipient: lead.email().clone(),
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{QuoteSnapshot, SubmitLeadCommand};
    use supportroi_engine::{estimate, EstimationInput};

    fn lead() -> Lead {
        let input = EstimationInput::default();
        let snapshot = QuoteSnapshot::capture(&input, &estimate(&input));
        let command = SubmitLeadCommand {
            company_name: "Acme".into(),
            contact_name: "Jo".into(),
            email: "jo@acme.example".into(),
            platform: "WooCommerce".into(),
            ..Default::default()
        };
        Lead::capture(command, snapshot).unwrap()
    }

    #[test]
    fn test_admin_alert() {
        let admin = Email::new("sales@supportroi.example").unwrap();
        let msg = NotificationMessage::admin_alert(&lead(), &admin);

        assert_eq!(msg.template, MessageTemplate::AdminAlert);
        assert_eq!(msg.recipient, admin);
        assert_eq!(msg.params["contact_email"], "jo@acme.example");
        assert_eq!(msg.params["contact_phone"], "Not provided");
        assert_eq!(msg.params["monthly_savings"], "$15,701");
        assert_eq!(msg.params.len(), 18);
    }

    #[test]
    fn test_customer_quote() {
        let admin = Email::new("sales@supportroi.example").unwrap();
        let msg = NotificationMessage::customer_quote(&lead(), &admin);

        assert_eq!(msg.template, MessageTemplate::CustomerQuote);
        assert_eq!(msg.recipient.as_str(), "jo@acme.example");
        assert_eq!(msg.params["to_name"], "Jo");
        assert_eq!(msg.params["from_email"], "sales@supportroi.example");
        assert!(!msg.params.contains_key("notes"));
    }
}
