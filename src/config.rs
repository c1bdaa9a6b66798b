use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::client::DEFAULT_BASE_URL;

pub const CONFIG_FILE: &str = "config.json";
pub const API_KEY_ENV: &str = "UPTIMEROBOT_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    /// Hours for the custom uptime ratios requested with every monitor.
    #[serde(default)]
    pub custom_uptime_ratio_periods: Vec<u32>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            custom_uptime_ratio_periods: Vec::new(),
            base_url: default_base_url(),
        }
    }
}

impl AppConfig {
    /// Key from the environment if set, else from the file.
    pub fn resolved_api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .or_else(|| self.api_key.clone())
    }
}

pub fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    if !path.exists() {
        tracing::info!("Config file {} not found, using defaults.", path.display());
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path).context("Failed to read config file")?;
    let config = serde_json::from_str::<AppConfig>(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn save_config(path: &Path, config: &AppConfig) -> anyhow::Result<()> {
    let content = serde_json::to_string_pretty(config)?;
    let tmp_file = path.with_extension("json.tmp");
    fs::write(&tmp_file, content).context("Failed to write temp config file")?;
    fs::rename(&tmp_file, path).context("Failed to replace config file")?;
    tracing::info!("Config saved to {}", path.display());
    Ok(())
}
