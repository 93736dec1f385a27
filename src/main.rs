// main.rs
//
// Writes every built-in airframe diagram into the current directory.

use airframe_svg::{CatalogOptions, render_catalog};
use anyhow::bail;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let results = render_catalog(Path::new("."), CatalogOptions::default());
    let failed: Vec<_> = results
        .iter()
        .filter(|(_, result)| result.is_err())
        .map(|(name, _)| name.as_str())
        .collect();

    log::info!("{} of {} diagrams written", results.len() - failed.len(), results.len());
    if !failed.is_empty() {
        bail!("failed to write: {}", failed.join(", "));
    }
    Ok(())
}
