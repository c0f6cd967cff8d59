//! EmailJS REST adapter

use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::application::{MessageTemplate, NotificationMessage};
use crate::config::EmailJsConfig;
use crate::ports::{NotificationError, NotificationSender};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Body of `POST /api/v1.0/email/send`
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a BTreeMap<&'static str, String>,
}

/// Sends notifications through EmailJS
pub struct EmailJsSender {
    config: EmailJsConfig,
    client: reqwest::Client,
}

impl EmailJsSender {
    pub fn new(config: EmailJsConfig) -> Result<Self, NotificationError> {
        if !config.is_configured() {
            return Err(NotificationError::NotConfigured(
                "EmailJS service, key and template ids are required".into(),
            ));
        }
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| NotificationError::Transport(e.to_string()))?;
        Ok(Self { config, client })
    }

    fn template_id(&self, template: MessageTemplate) -> &str {
        match template {
            MessageTemplate::AdminAlert => &self.config.admin_template_id,
            MessageTemplate::CustomerQuote => &self.config.customer_template_id,
        }
    }

    fn request<'a>(&'a self, message: &'a NotificationMessage) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: self.template_id(message.template),
            user_id: &self.config.public_key,
            template_params: &message.params,
        }
    }
}

#[async_trait]
impl NotificationSender for EmailJsSender {
    async fn send(&self, message: &NotificationMessage) -> Result<(), NotificationError> {
        let body = self.request(message);
        tracing::debug!(template = body.template_id, recipient = %message.recipient, "sending via EmailJS");

        let resp = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| NotificationError::Transport(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let body = resp.text().await.unwrap_or_default();
        Err(NotificationError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
