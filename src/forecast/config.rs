//! Model parameter file support.
//!
//! The engine ships with built-in parameters; deployments can re-tune them
//! through a TOML file without a rebuild. Every field is optional and
//! defaults to the built-in value, so a partial file only overrides what it
//! names.
//!
//! ```toml
//! [model]
//! default_base_rate = 100.0
//! weekend_factor = 0.7
//!
//! [model.base_rates]
//! "第一食堂" = 160.0
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use crate::core::domain::Venue;
use crate::forecast::jitter::{JITTER_HIGH, JITTER_LOW};

/// Top-level model configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub model: ModelSettings,
}

/// Tunable model parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Base occupancy per venue display label.
    #[serde(default = "default_base_rates")]
    pub base_rates: HashMap<String, f64>,
    /// Base rate applied to unrecognized venue labels.
    #[serde(default = "default_base_rate")]
    pub default_base_rate: f64,
    #[serde(default = "default_breakfast_factor")]
    pub breakfast_factor: f64,
    #[serde(default = "default_lunch_factor")]
    pub lunch_factor: f64,
    #[serde(default = "default_dinner_factor")]
    pub dinner_factor: f64,
    /// Multiplier applied on Saturdays and Sundays.
    #[serde(default = "default_weekend_factor")]
    pub weekend_factor: f64,
    #[serde(default = "default_jitter_low")]
    pub jitter_low: f64,
    #[serde(default = "default_jitter_high")]
    pub jitter_high: f64,
}

fn default_base_rates() -> HashMap<String, f64> {
    Venue::ALL
        .iter()
        .map(|v| {
            (
                v.label().to_string(),
                crate::forecast::model::CrowdModel::builtin_base_rate(*v),
            )
        })
        .collect()
}

fn default_base_rate() -> f64 {
    crate::forecast::model::CrowdModel::DEFAULT_BASE_RATE
}

fn default_breakfast_factor() -> f64 {
    0.6
}

fn default_lunch_factor() -> f64 {
    1.2
}

fn default_dinner_factor() -> f64 {
    1.0
}

fn default_weekend_factor() -> f64 {
    0.7
}

fn default_jitter_low() -> f64 {
    JITTER_LOW
}

fn default_jitter_high() -> f64 {
    JITTER_HIGH
}

impl Default for ModelSettings {
    fn default() -> Self {
        ModelSettings {
            base_rates: default_base_rates(),
            default_base_rate: default_base_rate(),
            breakfast_factor: default_breakfast_factor(),
            lunch_factor: default_lunch_factor(),
            dinner_factor: default_dinner_factor(),
            weekend_factor: default_weekend_factor(),
            jitter_low: default_jitter_low(),
            jitter_high: default_jitter_high(),
        }
    }
}

impl ModelConfig {
    /// Load and validate a model configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<ModelConfig> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read model config: {}", path.display()))?;
        let config: ModelConfig = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse model config: {}", path.display()))?;
        config.validate()?;
        log::info!("Loaded model config from {}", path.display());
        Ok(config)
    }

    /// Check parameter sanity shared by file-loaded and programmatic configs.
    pub fn validate(&self) -> anyhow::Result<()> {
        let m = &self.model;
        for (label, rate) in &m.base_rates {
            if *rate < 0.0 {
                bail!("Negative base rate for {}: {}", label, rate);
            }
        }
        if m.default_base_rate < 0.0 {
            bail!("Negative default base rate: {}", m.default_base_rate);
        }
        for (name, factor) in [
            ("breakfast_factor", m.breakfast_factor),
            ("lunch_factor", m.lunch_factor),
            ("dinner_factor", m.dinner_factor),
            ("weekend_factor", m.weekend_factor),
        ] {
            if factor <= 0.0 {
                bail!("Non-positive {}: {}", name, factor);
            }
        }
        if m.jitter_low >= m.jitter_high {
            bail!(
                "Jitter range is empty: [{}, {})",
                m.jitter_low,
                m.jitter_high
            );
        }
        Ok(())
    }
}
