use crate::models::Seed;
use crate::sources::parse_seed;
use crate::sources::traits::SeedSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Fetches the seed document over HTTP
pub struct HttpSeed {
    client: Client,
    url: String,
}

impl HttpSeed {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("tunelax/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SeedSource for HttpSeed {
    async fn load(&self) -> Result<Seed> {
        info!("Fetching seed from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch seed from {}", self.url))?;

        if !response.status().is_success() {
            warn!("Seed host returned status: {}", response.status());
            anyhow::bail!("Failed to fetch seed from {}: {}", self.url, response.status());
        }

        let json = response
            .text()
            .await
            .context("Failed to read response body")?;

        debug!("Downloaded {} bytes of seed", json.len());

        parse_seed(&json).with_context(|| format!("Invalid seed document at {}", self.url))
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}
