//! Cover command implementation

use anyhow::Result;
use bookfinder_core::{cover_url, Config, CoverSize};

/// Print the image URL for a cover id
pub fn cover(config: &Config, id: i64, size: CoverSize) -> Result<()> {
    println!("{}", cover_url(&config.covers_url, id, size));
    Ok(())
}
