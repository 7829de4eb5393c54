use crate::models::Seed;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for everything that can produce the seed document.
/// New backends (object storage, a database export) plug in here.
#[async_trait]
pub trait SeedSource: Send + Sync {
    /// Load and parse the full seed
    async fn load(&self) -> Result<Seed>;

    /// Short name of the source, used in logs
    fn source_name(&self) -> &'static str;
}
