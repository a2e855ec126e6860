use anyhow::Result;
use tracing::info;

use crate::config::HostConfig;

/// Fails when the bundle directory or its `index.html` is missing.
pub fn check(config: &HostConfig) -> Result<()> {
    let index = config.index_file()?;
    info!("Bundle OK: {}", index.display());
    println!("{}", index.display());
    Ok(())
}
