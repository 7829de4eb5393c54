use crate::models::Seed;
use crate::sources::parse_seed;
use crate::sources::traits::SeedSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reads the seed from a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileSeed {
    path: PathBuf,
}

impl FileSeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SeedSource for FileSeed {
    async fn load(&self) -> Result<Seed> {
        info!("Loading seed from {}", self.path.display());

        let json = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read seed file {}", self.path.display()))?;

        debug!("Read {} bytes from {}", json.len(), self.path.display());

        parse_seed(&json).with_context(|| format!("Invalid seed file {}", self.path.display()))
    }

    fn source_name(&self) -> &'static str {
        "file"
    }
}
