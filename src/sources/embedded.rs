use crate::models::Seed;
use crate::sources::parse_seed;
use crate::sources::traits::SeedSource;
use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

/// Seed document bundled into the binary
pub const EMBEDDED_SEED: &str = include_str!("../../data/seed.json");

/// Serves the bundled seed. Used when no other location is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSeed;

impl EmbeddedSeed {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SeedSource for EmbeddedSeed {
    async fn load(&self) -> Result<Seed> {
        debug!("Parsing {} bytes of embedded seed", EMBEDDED_SEED.len());
        parse_seed(EMBEDDED_SEED)
    }

    fn source_name(&self) -> &'static str {
        "embedded"
    }
}
