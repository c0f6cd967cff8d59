//! Lead capture configuration

use serde::{Deserialize, Serialize};

use crate::domain::Email;
use crate::LeadError;

/// Default EmailJS REST endpoint
pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// EmailJS account settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub public_key: String,
    pub admin_template_id: String,
    pub customer_template_id: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    EMAILJS_ENDPOINT.to_string()
}

impl EmailJsConfig {
    /// All ids present
    pub fn is_configured(&self) -> bool {
        [
            &self.service_id,
            &self.public_key,
            &self.admin_template_id,
            &self.customer_template_id,
        ]
        .iter()
        .all(|v| !v.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadCaptureConfig {
    /// Sales inbox receiving new-lead alerts
    pub admin_email: String,
    #[serde(default)]
    pub emailjs: Option<EmailJsConfig>,
}

impl Default for LeadCaptureConfig {
    fn default() -> Self {
        Self {
            admin_email: "sales@supportroi.example".into(),
            emailjs: None,
        }
    }
}

impl LeadCaptureConfig {
    pub fn admin_email(&self) -> Result<Email, LeadError> {
        Email::new(&self.admin_email)
            .map_err(|e| LeadError::Config(format!("admin email: {}", e)))
    }

    /// EmailJS settings, only when complete
    pub fn delivery(&self) -> Option<&EmailJsConfig> {
        self.emailjs.as_ref().filter(|c| c.is_configured())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emailjs() -> EmailJsConfig {
        EmailJsConfig {
            service_id: "service_abc".into(),
            public_key: "pk_123".into(),
            admin_template_id: "template_admin".into(),
            customer_template_id: "template_customer".into(),
            endpoint: EMAILJS_ENDPOINT.into(),
        }
    }

    #[test]
    fn test_partial_emailjs_is_not_delivery() {
        let config = LeadCaptureConfig {
            emailjs: Some(EmailJsConfig {
                public_key: " ".into(),
                ..emailjs()
            }),
            ..Default::default()
        };
        assert!(config.delivery().is_none());

        let config = LeadCaptureConfig {
            emailjs: Some(emailjs()),
            ..Default::default()
        };
        assert!(config.delivery().is_some());
    }

    #[test]
    fn test_endpoint_defaults() {
        let config: EmailJsConfig = serde_json::from_str(
            r#"{"service_id":"s","public_key":"p","admin_template_id":"a","customer_template_id":"c"}"#,
        )
        .unwrap();
        assert_eq!(config.endpoint, EMAILJS_ENDPOINT);
    }

    #[test]
    fn test_bad_admin_email() {
        let config = LeadCaptureConfig {
            admin_email: "sales".into(),
            emailjs: None,
        };
        assert!(matches!(config.admin_email(), Err(LeadError::Config(_))));
    }
}
