//! CLI Configuration

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use supportroi_engine::CoverageHours;
use supportroi_leads::LeadCaptureConfig;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: InputDefaults,
    #[serde(default)]
    pub leads: LeadCaptureConfig,
}

/// Calculator inputs applied when a flag is not given
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDefaults {
    pub monthly_tickets: Option<u64>,
    pub avg_response_time_minutes: Option<u32>,
    pub support_staff: Option<u32>,
    pub avg_staff_cost_monthly: Option<Decimal>,
    pub conversion_percent: Option<Decimal>,
    pub avg_order_value: Option<Decimal>,
    pub current_coverage: Option<CoverageHours>,
    pub desired_coverage: Option<CoverageHours>,
}

impl Config {
    pub fn load(profile: Option<&str>) -> Result<Self, String> {
        let path = Self::config_path(profile)?;
        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| e.to_string())?;
            Self::parse(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, profile: Option<&str>) -> Result<PathBuf, String> {
        let path = Self::config_path(profile)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        fs::write(&path, self.to_toml()?).map_err(|e| e.to_string())?;
        Ok(path)
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| e.to_string())
    }

    fn config_path(profile: Option<&str>) -> Result<PathBuf, String> {
        let home = dirs::home_dir().ok_or("Cannot find home directory")?;
        let filename = match profile {
            Some(p) => format!("config.{}.toml", p),
            None => "config.toml".to_string(),
        };
        Ok(home.join(".supportroi").join(filename))
    }
}
