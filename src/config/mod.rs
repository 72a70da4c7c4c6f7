//! Configuration management for the native host.
//!
//! Layered: built-in defaults, then `config.{toml,json,yaml}` in the
//! per-user config directory, then `VSC_*` environment variables.

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built web client (`index.html` + assets)
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
}

fn default_port() -> u16 {
    8080
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("dist")
}

pub fn load_config() -> Result<Config> {
    let config_dir = directories::ProjectDirs::from("com", "team-chill-guys", "video-scoring")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    load_config_from(&config_dir)
}

/// Load configuration using `config_dir` as the location of the optional
/// config file.
pub fn load_config_from(config_dir: &Path) -> Result<Config> {
    let config = ::config::Config::builder()
        // Start with defaults
        .set_default("port", 8080)?
        .set_default("dist_dir", "dist")?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy())
                .required(false),
        )
        // Override with environment variables (VSC_PORT, VSC_DIST_DIR)
        .add_source(
            ::config::Environment::with_prefix("VSC")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}
