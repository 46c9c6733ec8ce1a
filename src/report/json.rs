//! JSON report
//!
//! Absent optional fields serialize as `null` so "not set" survives the trip to
//! tools like `jq`.

use serde::Serialize;

use super::Verbosity;
use crate::error::Result;
use crate::model::WebhookConfiguration;

#[derive(Serialize)]
struct SummaryConfig<'a> {
    name: &'a str,
    webhooks: Vec<SummaryEntry<'a>>,
}

#[derive(Serialize)]
struct SummaryEntry<'a> {
    name: &'a str,
}

impl<'a> From<&'a WebhookConfiguration> for SummaryConfig<'a> {
    fn from(config: &'a WebhookConfiguration) -> Self {
        Self {
            name: &config.name,
            webhooks: config
                .webhooks
                .iter()
                .map(|w| SummaryEntry { name: &w.name })
                .collect(),
        }
    }
}

/// Render `configs` as a pretty-printed JSON array in the order given.
pub fn render(configs: &[WebhookConfiguration], verbosity: Verbosity) -> Result<String> {
    let json = match verbosity {
        Verbosity::Detailed => serde_json::to_string_pretty(configs)?,
        Verbosity::Summary => {
            let summary: Vec<SummaryConfig> = configs.iter().map(SummaryConfig::from).collect();
            serde_json::to_string_pretty(&summary)?
        }
    };
    Ok(json)
}
