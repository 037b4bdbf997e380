//! Engine and server configuration
//!
//! Loaded from `carbonmap.toml`. Validation runs at load time so an
//! out-of-range tunable never surfaces mid-query.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Result};

pub const CONFIG_FILE_NAME: &str = "carbonmap.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Tunables of the aggregation and recommendation engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// How many high-emission candidates the recommendation list may hold
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Estimated reducible share of a candidate's historical emissions.
    /// The one tunable business assumption in the engine; an estimate, not
    /// a measured value.
    #[serde(default = "default_savings_fraction")]
    pub savings_fraction: f64,

    /// Whether draft orders contribute to the aggregates. Intended business
    /// rules have not confirmed either way, so this stays a flag.
    #[serde(default = "default_include_draft_orders")]
    pub include_draft_orders: bool,
}

fn default_top_k() -> usize {
    5
}

fn default_savings_fraction() -> f64 {
    0.3
}

fn default_include_draft_orders() -> bool {
    false
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            savings_fraction: default_savings_fraction(),
            include_draft_orders: default_include_draft_orders(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.savings_fraction.is_finite() || !(0.0..=1.0).contains(&self.savings_fraction) {
            return Err(EngineError::InvalidConfiguration(format!(
                "savings_fraction must be within [0, 1], got {}",
                self.savings_fraction
            )));
        }
        Ok(())
    }
}

/// HTTP facade settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Shared secret the report endpoints require as a bearer credential.
    /// Issuance and identity live with the external auth service.
    #[serde(default)]
    pub bearer_token: Option<String>,
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            bearer_token: None,
        }
    }
}

/// Parse and validate config from TOML contents
pub fn parse_config(contents: &str) -> Result<Config> {
    let config: Config = toml::from_str(contents).map_err(|e| {
        EngineError::InvalidConfiguration(format!("failed to parse {CONFIG_FILE_NAME}: {e}"))
    })?;
    config.engine.validate()?;
    Ok(config)
}

/// Load configuration from an explicit path, or from `carbonmap.toml` in the
/// working directory when present, or fall back to defaults. An explicit
/// path that cannot be read is an error; a missing default file is not.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => parse_config(&fs::read_to_string(path)?),
        None => {
            let default_path = Path::new(CONFIG_FILE_NAME);
            if default_path.exists() {
                parse_config(&fs::read_to_string(default_path)?)
            } else {
                tracing::debug!("no {CONFIG_FILE_NAME} found, using defaults");
                Ok(Config::default())
            }
        }
    }
}

pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"[engine]
# How many high-emission candidates the recommendation list may hold.
top_k = 5

# Estimated reducible share of a candidate's historical emissions, in [0, 1].
savings_fraction = 0.3

# Whether draft orders contribute to the aggregates.
include_draft_orders = false

[server]
bind = "127.0.0.1:8080"

# Bearer credential required by the report endpoints. May also be supplied
# via the CARBONMAP_API_TOKEN environment variable.
# bearer_token = "change-me"
"#;

/// Write the default config template to `path` (the `init` subcommand)
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(EngineError::InvalidConfiguration(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    fs::write(path, DEFAULT_CONFIG_TEMPLATE)?;
    Ok(())
}
