//! Lead capture service

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::messages::NotificationMessage;
use crate::domain::{Email, Lead, LeadId, QuoteSnapshot, SubmitLeadCommand};
use crate::ports::{LeadBackupStore, NotificationSender};
use crate::LeadError;

/// How a submission was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AckStatus {
    /// Both messages went out
    Delivered,
    /// Delivery failed; the lead is kept for manual follow-up
    RetainedForFollowUp,
    /// No sender configured; the lead is kept and logged
    NotificationsDisabled,
}

/// What the prospect is told after submitting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub lead_id: LeadId,
    pub status: AckStatus,
    pub message: String,
}

/// Captures leads and delivers quotes
pub struct LeadCaptureService {
    sender: Option<Arc<dyn NotificationSender>>,
    store: Arc<dyn LeadBackupStore>,
    admin_email: Email,
}

impl LeadCaptureService {
    pub fn new(
        sender: Option<Arc<dyn NotificationSender>>,
        store: Arc<dyn LeadBackupStore>,
        admin_email: Email,
    ) -> Self {
        Self {
            sender,
            store,
            admin_email,
        }
    }

    /// Submit a quote request.
    ///
    /// Only invalid submissions are errors. Delivery problems are absorbed:
    /// the prospect is always acknowledged and the lead is retained.
    pub async fn submit(
        &self,
        command: SubmitLeadCommand,
        snapshot: QuoteSnapshot,
    ) -> Result<Acknowledgement, LeadError> {
        let lead = Lead::capture(command, snapshot)?;

        let Some(sender) = &self.sender else {
            tracing::info!(
                lead_id = %lead.id(),
                company = lead.company_name(),
                contact = lead.contact_name(),
                email = %lead.email(),
                phone = lead.phone(),
                platform = lead.platform(),
                monthly_tickets = %lead.snapshot().monthly_tickets,
                support_staff = %lead.snapshot().support_staff,
                monthly_savings = %lead.snapshot().monthly_savings,
                annual_savings = %lead.snapshot().annual_savings,
                recommended_plan = %lead.snapshot().recommended_plan,
                plan_price = %lead.snapshot().plan_price,
                "new lead captured; email delivery is not configured"
            );
            self.retain(&lead).await;
            return Ok(Acknowledgement {
                lead_id: lead.id(),
                status: AckStatus::NotificationsDisabled,
                message: format!(
                    "Thank you {}! Your quote request has been received. \
                     We'll send your custom quote to {} within 24 hours.\n\n\
                     Your Results:\n\
                     • Monthly Savings: {}\n\
                     • Recommended Plan: {}\n\n\
                     (Developer Note: Check the log for lead data. \
                     Email sending will work after EmailJS setup.)",
                    lead.contact_name(),
                    lead.email(),
                    lead.snapshot().monthly_savings,
                    lead.snapshot().recommended_plan,
                ),
            });
        };

        let admin = NotificationMessage::admin_alert(&lead, &self.admin_email);
        let customer = NotificationMessage::customer_quote(&lead, &self.admin_email);

        let (admin_result, customer_result) = tokio::join!(sender.send(&admin), sender.send(&customer));

        match admin_result.and(customer_result) {
            Ok(()) => {
                tracing::info!(lead_id = %lead.id(), email = %lead.email(), "quote emails sent");
                Ok(Acknowledgement {
                    lead_id: lead.id(),
                    status: AckStatus::Delivered,
                    message: format!(
                        "Thank you! We've sent your custom quote to {}\n\n\
                         We'll follow up within 24 hours with detailed implementation steps.",
                        lead.email()
                    ),
                })
            }
            Err(e) => {
                tracing::error!(
                    lead_id = %lead.id(),
                    error = %e,
                    lead = %lead.backup_record(),
                    "quote email delivery failed"
                );
                self.retain(&lead).await;
                Ok(Acknowledgement {
                    lead_id: lead.id(),
                    status: AckStatus::RetainedForFollowUp,
                    message: format!(
                        "There was an issue sending the emails, but we've saved your information.\n\n\
                         We'll contact you at {} within 24 hours.\n\n\
                         If urgent, please email us directly at {}",
                        lead.email(),
                        self.admin_email
                    ),
                })
            }
        }
    }

    /// Leads waiting for manual follow-up
    pub async fn pending_follow_ups(&self) -> Result<Vec<Lead>, LeadError> {
        Ok(self.store.list().await?)
    }

    async fn retain(&self, lead: &Lead) {
        if let Err(e) = self.store.retain(lead).await {
            // Last resort: the log line is the only record left
            tracing::error!(
                lead_id = %lead.id(),
                error = %e,
                lead = %lead.backup_record(),
                "failed to retain lead"
            );
        }
    }
}
