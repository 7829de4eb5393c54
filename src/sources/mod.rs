pub mod embedded;
pub mod file;
pub mod http;
pub mod traits;

pub use embedded::EmbeddedSeed;
pub use file::FileSeed;
pub use http::HttpSeed;
pub use traits::SeedSource;

use crate::models::Seed;
use anyhow::{Context, Result};

/// Parse a seed JSON document
pub fn parse_seed(json: &str) -> Result<Seed> {
    serde_json::from_str(json).context("Failed to parse seed JSON")
}

/// Pick a source for a seed location.
///
/// No location means the embedded seed; `http://` and `https://` URLs are
/// fetched; anything else is treated as a file path.
pub fn source_for(location: Option<&str>) -> Result<Box<dyn SeedSource>> {
    match location {
        None => Ok(Box::new(EmbeddedSeed::new())),
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
            Ok(Box::new(HttpSeed::new(url)?))
        }
        Some(path) => Ok(Box::new(FileSeed::new(path))),
    }
}
