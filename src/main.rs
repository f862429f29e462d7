//! WXR Engine - Render a feed manifest as a WXR document
//!
//! Reads a JSON feed manifest from the configured input file (stdin when
//! none is set), stages every entry and writes the rendered document to
//! stdout. Logs go to stderr.

use std::fs;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wxr_engine::application::dto::FeedManifest;
use wxr_engine::domain::services::IdGenerator;
use wxr_engine::infrastructure::config::AppConfig;
use wxr_engine::WxrDocument;

fn main() -> Result<()> {
    // Load configuration (also reads .env)
    let config = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wxr_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let raw = match &config.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?,
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read manifest from stdin")?;
            raw
        }
    };
    let manifest: FeedManifest =
        serde_json::from_str(&raw).context("Manifest is not a valid feed manifest")?;
    tracing::info!(site = %manifest.site.name, "Manifest loaded");

    let ids = match config.seed {
        Some(seed) => IdGenerator::seeded(seed),
        None => IdGenerator::from_entropy(),
    };
    let mut document =
        WxrDocument::from_manifest(manifest, ids).context("Failed to stage manifest")?;
    let xml = document
        .render(&config.render)
        .context("Failed to render document")?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(xml.as_bytes())?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;

    tracing::info!(bytes = xml.len(), "Document written");
    Ok(())
}
