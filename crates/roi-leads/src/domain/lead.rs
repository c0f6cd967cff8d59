//! Lead aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use supportroi_engine::presentation::{format_count, ResultView};
use supportroi_engine::{EstimationInput, EstimationResult};

use super::value_objects::{Email, LeadId};
use crate::LeadError;

/// Placeholder stored when no phone number is given
pub const PHONE_NOT_PROVIDED: &str = "Not provided";

/// Calculator figures frozen at the moment the prospect asked for a quote
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSnapshot {
    pub monthly_tickets: String,
    pub support_staff: String,
    pub optimized_staff: String,
    pub current_response_time: String,
    pub current_conversion: String,
    pub new_conversion: String,
    pub monthly_savings: String,
    pub annual_savings: String,
    pub recommended_plan: String,
    pub plan_price: String,
}

impl QuoteSnapshot {
    pub fn capture(input: &EstimationInput, result: &EstimationResult) -> Self {
        let view = ResultView::render(input, result);
        Self {
            monthly_tickets: format_count(input.monthly_tickets),
            support_staff: input.support_staff.to_string(),
            optimized_staff: view.optimized_staff,
            current_response_time: view.current_response_time,
            current_conversion: view.current_conversion,
            new_conversion: view.new_conversion,
            monthly_savings: view.monthly_savings,
            annual_savings: view.annual_savings,
            recommended_plan: view.plan.name,
            plan_price: view.plan.price,
        }
    }

    /// Pre-filled notes for the quote form
    pub fn summary_notes(&self) -> String {
        format!(
            "Calculator Results:\n\
             - Monthly Tickets: {}\n\
             - Current Staff: {}\n\
             - Optimized Staff: {}\n\
             - Current Response Time: {}\n\
             - Current Conversion: {}\n\
             - Projected Savings: {}",
            self.monthly_tickets,
            self.support_staff,
            self.optimized_staff,
            self.current_response_time,
            self.current_conversion,
            self.monthly_savings,
        )
    }
}

/// Quote request as submitted from the form
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SubmitLeadCommand {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub platform: String,
    pub notes: Option<String>,
}

/// Prospect who requested a quote
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Lead {
    id: LeadId,
    company_name: String,
    contact_name: String,
    email: Email,
    phone: String,
    platform: String,
    notes: String,
    snapshot: QuoteSnapshot,
    captured_at: DateTime<Utc>,
}

impl Lead {
    /// Validate a submission and attach the quote snapshot
    pub fn capture(command: SubmitLeadCommand, snapshot: QuoteSnapshot) -> Result<Self, LeadError> {
        let company_name = required("company name", command.company_name)?;
        let contact_name = required("contact name", command.contact_name)?;
        let platform = required("platform", command.platform)?;
        let email = Email::new(command.email).map_err(|e| LeadError::Validation(e.to_string()))?;

        let phone = command
            .phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| PHONE_NOT_PROVIDED.into());

        let notes = command
            .notes
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| snapshot.summary_notes());

        Ok(Self {
            id: LeadId::new(),
            company_name,
            contact_name,
            email,
            phone,
            platform,
            notes,
            snapshot,
            captured_at: Utc::now(),
        })
    }

    pub fn id(&self) -> LeadId {
        self.id
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn contact_name(&self) -> &str {
        &self.contact_name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn snapshot(&self) -> &QuoteSnapshot {
        &self.snapshot
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// Full lead as one JSON line, for logs that must stand in for storage
    pub fn backup_record(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

fn required(field: &str, value: String) -> Result<String, LeadError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(LeadError::Validation(format!("{} is required", field)));
    }
    Ok(value.to_string())
}
