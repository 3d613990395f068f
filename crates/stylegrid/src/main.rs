// File: crates/stylegrid/src/main.rs
// Summary: Renders the 2x2 style gallery for every built-in theme and writes one PNG per theme.

use anyhow::{Context, Result};
use stylegrid_core::{GalleryConfig, PngWriter, StyleRegistry, ThemeDriver};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();

    let config = GalleryConfig::default();
    let out_dir = config.output_dir.clone();
    println!("Rendering themes: {}", config.themes.join(", "));

    let driver = ThemeDriver::new(StyleRegistry::builtin(), config);
    let mut writer = PngWriter::new(&out_dir);
    driver
        .run_default(&mut writer)
        .with_context(|| format!("failed to render style gallery into {}", out_dir.display()))?;

    tracing::debug!(count = writer.written().len(), "gallery written");
    for path in writer.written() {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Log filter comes from `RUST_LOG`, defaulting to `info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
