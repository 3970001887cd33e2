use crate::error::{InvoiceError, Result};
use crate::locale::{default_language_overrides, Language};
use clap::Parser;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

pub const DEFAULT_COMPANY_NAME: &str = "MELI";
pub const DEFAULT_YEAR: i32 = 2025;

/// Knobs for the email text. Every field has a default, so `{}` is a
/// valid JSON config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    pub company_name: String,
    pub include_ids: bool,
    pub year: i32,
    /// Per-consultant language. Entries given in a config file are merged
    /// over the built-in ones.
    #[serde(deserialize_with = "merge_overrides")]
    pub language_overrides: IndexMap<String, Language>,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            company_name: DEFAULT_COMPANY_NAME.to_string(),
            include_ids: true,
            year: DEFAULT_YEAR,
            language_overrides: default_language_overrides(),
        }
    }
}

fn merge_overrides<'de, D>(
    deserializer: D,
) -> std::result::Result<IndexMap<String, Language>, D::Error>
where
    D: Deserializer<'de>,
{
    let custom = IndexMap::<String, Language>::deserialize(deserializer)?;
    let mut merged = default_language_overrides();
    merged.extend(custom);
    Ok(merged)
}

impl EmailConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.company_name.trim().is_empty() {
            return Err(InvoiceError::ConfigError {
                message: "company_name cannot be empty".to_string(),
            });
        }
        if !(2000..=2100).contains(&self.year) {
            return Err(InvoiceError::ConfigError {
                message: format!("year must be between 2000 and 2100, got {}", self.year),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "fee_reminders")]
#[command(about = "Generate invoicing reminder emails from a timesheet export")]
pub struct CliArgs {
    /// Timesheet export in CSV format
    pub input: PathBuf,

    /// Optional JSON config, e.g. '{"company_name": "MELI", "include_ids": false}'
    pub config_json: Option<String>,

    #[arg(long)]
    pub company_name: Option<String>,

    #[arg(long, help = "Leave internal IDs out of the email body")]
    pub no_ids: bool,

    #[arg(long)]
    pub year: Option<i32>,

    #[arg(long, help = "Also write the JSON result to this file")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Print a summary table of the generated emails to stderr")]
    pub preview: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliArgs {
    /// JSON config first, then command line flags on top. A config blob
    /// that doesn't parse is ignored.
    pub fn email_config(&self) -> EmailConfig {
        let mut config = match self.config_json.as_deref() {
            Some(raw) => EmailConfig::from_json_str(raw).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unparsable config: {}", e);
                EmailConfig::default()
            }),
            None => EmailConfig::default(),
        };
        if let Some(name) = &self.company_name {
            config.company_name = name.clone();
        }
        if self.no_ids {
            config.include_ids = false;
        }
        if let Some(year) = self.year {
            config.year = year;
        }
        config
    }
}
