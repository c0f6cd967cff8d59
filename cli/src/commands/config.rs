//! Config commands

use supportroi_leads::config::EMAILJS_ENDPOINT;
use supportroi_leads::{Email, EmailJsConfig};

use crate::config::Config;
use crate::{CliResult, ConfigCommands};

pub fn handle(action: ConfigCommands, profile: Option<&str>) -> CliResult {
    match action {
        ConfigCommands::Init => {
            let path = Config::default().save(profile)?;
            println!("Configuration initialized at {}", path.display());
        }
        ConfigCommands::SetEmailjs {
            service_id,
            public_key,
            admin_template,
            customer_template,
            endpoint,
        } => {
            let mut config = Config::load(profile)?;
            config.leads.emailjs = Some(EmailJsConfig {
                service_id,
                public_key,
                admin_template_id: admin_template,
                customer_template_id: customer_template,
                endpoint: endpoint.unwrap_or_else(|| EMAILJS_ENDPOINT.into()),
            });
            config.save(profile)?;
            println!("Set EmailJS delivery successfully");
        }
        ConfigCommands::SetAdminEmail { email } => {
            let email = Email::new(email)?;
            let mut config = Config::load(profile)?;
            config.leads.admin_email = email.to_string();
            config.save(profile)?;
            println!("Set admin email to {}", email);
        }
        ConfigCommands::Show => {
            let mut config = Config::load(profile)?;
            if let Some(emailjs) = config.leads.emailjs.as_mut() {
                emailjs.public_key = mask(&emailjs.public_key);
            }
            print!("{}", config.to_toml()?);
        }
    }
    Ok(())
}

fn mask(secret: &str) -> String {
    if secret.is_empty() {
        return "(not set)".into();
    }
    let shown: String = secret.chars().take(4).collect();
    format!("{}****", shown)
}
