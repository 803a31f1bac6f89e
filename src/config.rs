use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::{ScoringTuning, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub share: ShareSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self { path: default_catalog_path() }
    }
}

fn default_catalog_path() -> String { "data/festivals.json".to_string() }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    pub default_limit: Option<u16>,
    pub max_limit: Option<u16>,
}

impl MatchingSettings {
    pub fn default_limit(&self) -> u16 {
        self.default_limit.unwrap_or(10)
    }

    pub fn max_limit(&self) -> u16 {
        self.max_limit.unwrap_or(50)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub tuning: TuningConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_genre_weight")]
    pub genre: f64,
    #[serde(default = "default_budget_weight")]
    pub budget: f64,
    #[serde(default = "default_month_weight")]
    pub month: f64,
    #[serde(default = "default_region_weight")]
    pub region: f64,
    #[serde(default = "default_vibe_weight")]
    pub vibe: f64,
    #[serde(default = "default_duration_weight")]
    pub duration: f64,
    #[serde(default = "default_camping_weight")]
    pub camping: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            genre: default_genre_weight(),
            budget: default_budget_weight(),
            month: default_month_weight(),
            region: default_region_weight(),
            vibe: default_vibe_weight(),
            duration: default_duration_weight(),
            camping: default_camping_weight(),
        }
    }
}

fn default_genre_weight() -> f64 { 0.30 }
fn default_budget_weight() -> f64 { 0.20 }
fn default_month_weight() -> f64 { 0.15 }
fn default_region_weight() -> f64 { 0.10 }
fn default_vibe_weight() -> f64 { 0.10 }
fn default_duration_weight() -> f64 { 0.10 }
fn default_camping_weight() -> f64 { 0.05 }

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            genre: config.genre,
            budget: config.budget,
            month: config.month,
            region: config.region,
            vibe: config.vibe,
            duration: config.duration,
            camping: config.camping,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TuningConfig {
    #[serde(default = "default_reason_threshold")]
    pub reason_threshold: f64,
    #[serde(default = "default_budget_tolerance_ratio")]
    pub budget_tolerance_ratio: f64,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            reason_threshold: default_reason_threshold(),
            budget_tolerance_ratio: default_budget_tolerance_ratio(),
        }
    }
}

fn default_reason_threshold() -> f64 { 0.5 }
fn default_budget_tolerance_ratio() -> f64 { 0.25 }

impl From<&TuningConfig> for ScoringTuning {
    fn from(config: &TuningConfig) -> Self {
        Self {
            reason_threshold: config.reason_threshold,
            budget_tolerance_ratio: config.budget_tolerance_ratio,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShareSettings {
    #[serde(default = "default_og_image_endpoint")]
    pub og_image_endpoint: String,
}

impl Default for ShareSettings {
    fn default() -> Self {
        Self { og_image_endpoint: default_og_image_endpoint() }
    }
}

fn default_og_image_endpoint() -> String { "/api/og".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with FESTIVAL__)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., FESTIVAL__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("FESTIVAL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = apply_env_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("FESTIVAL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }

    pub fn tuning(&self) -> ScoringTuning {
        ScoringTuning::from(&self.scoring.tuning)
    }
}

/// Apply well-known unprefixed environment variables
///
/// `CATALOG_PATH` points the service at a different festival dataset.
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Ok(path) = std::env::var("CATALOG_PATH") {
        builder = builder.set_override("catalog.path", path)?;
    }

    builder.build()
}
