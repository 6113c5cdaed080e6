//! Configuration Management
//!
//! Loads CLI defaults from TOML files. Configuration includes:
//! - Random subset defaults (length, range, strategy)
//! - Whitespace defaults (strip mode, control-character replacement)
//! - Demo settings (timing iterations)
//!
//! The library functions never read configuration; only the CLI does.

use crate::errors::KataError;
use crate::random_subset::{Strategy, SubsetRequest};
use crate::whitespace::StripMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "katas.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub random: RandomConfig,

    #[serde(default)]
    pub whitespace: WhitespaceConfig,

    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomConfig {
    #[serde(default = "default_length")]
    pub length: usize,
    #[serde(default = "default_min")]
    pub min: i64,
    #[serde(default = "default_max")]
    pub max: i64,
    #[serde(default)]
    pub strategy: Strategy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhitespaceConfig {
    #[serde(default)]
    pub mode: StripMode,
    #[serde(default = "default_replacement")]
    pub replacement: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_timing_iterations")]
    pub timing_iterations: u32,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            length: default_length(),
            min: default_min(),
            max: default_max(),
            strategy: Strategy::default(),
        }
    }
}

impl Default for WhitespaceConfig {
    fn default() -> Self {
        Self {
            mode: StripMode::default(),
            replacement: default_replacement(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            timing_iterations: default_timing_iterations(),
        }
    }
}

fn default_length() -> usize {
    SubsetRequest::default().length
}
fn default_min() -> i64 {
    SubsetRequest::default().min
}
fn default_max() -> i64 {
    SubsetRequest::default().max
}
fn default_replacement() -> String {
    " ".to_string()
}
fn default_timing_iterations() -> u32 {
    10_000
}

impl RandomConfig {
    pub fn request(&self) -> SubsetRequest {
        SubsetRequest::new(self.length, self.min, self.max)
    }
}

impl Config {
    /// Load from `path`, else `katas.toml`, else `~/.config/katas/config.toml`,
    /// else defaults. Environment overrides are applied last, then validated.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut config = match path {
            Some(p) => {
                let content = std::fs::read_to_string(p)
                    .with_context(|| format!("Failed to read config from {}", p))?;
                Self::from_toml(&content)?
            }
            None => {
                let home_config = dirs::home_dir().map(|h| h.join(".config/katas/config.toml"));

                let mut default_paths = vec![std::path::PathBuf::from(LOCAL_CONFIG_FILE)];
                if let Some(hc) = home_config {
                    default_paths.push(hc);
                }

                let mut loaded = None;
                for p in &default_paths {
                    if let Ok(content) = std::fs::read_to_string(p) {
                        debug!(path = %p.display(), "Loaded config file");
                        loaded = Some(Self::from_toml(&content)?);
                        break;
                    }
                }
                loaded.unwrap_or_else(|| {
                    debug!("No config file found, using defaults");
                    Self::default()
                })
            }
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| KataError::Config(e.to_string()))
            .context("Failed to parse config")
    }

    /// Override with `KATAS_*` environment variables. Unparseable values are
    /// ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Some(n) = env_parse::<usize>("KATAS_RANDOM_LENGTH") {
            self.random.length = n;
        }
        if let Some(n) = env_parse::<i64>("KATAS_RANDOM_MIN") {
            self.random.min = n;
        }
        if let Some(n) = env_parse::<i64>("KATAS_RANDOM_MAX") {
            self.random.max = n;
        }
        if let Some(strategy) = env_parse::<Strategy>("KATAS_RANDOM_STRATEGY") {
            self.random.strategy = strategy;
        }
        if let Some(n) = env_parse::<u32>("KATAS_TIMING_ITERATIONS") {
            self.demo.timing_iterations = n;
        }
    }

    pub fn validate(&self) -> std::result::Result<(), KataError> {
        self.random
            .request()
            .validate_for(self.random.strategy)
            .map_err(|e| KataError::Config(format!("[random] {}", e)))?;
        if self.demo.timing_iterations == 0 {
            return Err(KataError::Config(
                "[demo] timing_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok()?.trim().parse().ok()
}
