use anyhow::Context;
use boxoffice_catalog::TicketRequest;
use boxoffice_core::RawAccountId;
use serde::Deserialize;
use std::path::Path;

/// A purchase read from disk:
/// `{"account_id": 1, "tickets": [{"type": "ADULT", "quantity": 2}]}`
#[derive(Debug, Deserialize)]
pub struct OrderFile {
    pub account_id: RawAccountId,
    #[serde(default)]
    pub tickets: Vec<TicketRequest>,
}

impl OrderFile {
    pub fn parse(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Invalid order file")
    }

    pub async fn read(path: &Path) -> anyhow::Result<Self> {
        let json = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read order file {}", path.display()))?;
        Self::parse(&json)
    }
}
