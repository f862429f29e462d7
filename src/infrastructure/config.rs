//! Application configuration for the `wxr-engine` binary
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `wxr.toml` in the working directory, then `WXR_*` environment variables
//! (`WXR_INPUT`, `WXR_SEED`, `WXR_RENDER__PRETTY`, ...). A `.env` file is
//! loaded into the environment first.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::value_objects::RenderOptions;

const CONFIG_FILE: &str = "wxr";
const ENV_PREFIX: &str = "WXR";

/// Binary configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Feed manifest to read; stdin when absent
    pub input: Option<PathBuf>,
    /// Seed for deterministic identifiers; OS entropy when absent
    pub seed: Option<u64>,
    /// Output formatting
    pub render: RenderOptions,
}

impl AppConfig {
    /// Load configuration from `.env`, `wxr.toml` and the environment
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = RenderOptions::default();
        config::Config::builder()
            .set_default("render.pretty", defaults.pretty)?
            .set_default("render.indent", defaults.indent)?
            .set_default("render.newline", defaults.newline)?
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to assemble configuration sources")?
            .try_deserialize()
            .context("Invalid wxr-engine configuration")
    }
}
