use std::path::PathBuf;

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{CommonError, CommonResult};

const DEFAULT_CONFIG: &str = include_str!("default.toml");

/// The environment variable prefix for configuration overrides.
/// Nested keys are separated by `__`, e.g. `FARE__MODEL__PATH`.
pub const CONFIG_ENV_PREFIX: &str = "FARE__";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub model: ModelConfig,
    pub prediction: PredictionConfig,
    pub form: FormConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> CommonResult<Self> {
        Self::figment()
            .extract()
            .map_err(|e| CommonError::invalid(e.to_string()))
    }

    fn figment() -> Figment {
        Figment::from(Toml::string(DEFAULT_CONFIG))
            .admerge(Env::prefixed(CONFIG_ENV_PREFIX).map(|p| p.as_str().replace("__", ".").into()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub path: PathBuf,
    /// The declared accuracy of the artifact at `path`.
    /// Nothing verifies that the two stay in sync.
    pub r2_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionConfig {
    pub minimum_charge: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    pub default_age: u32,
    pub default_bmi: f64,
    pub default_smoker: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    pub default_log_level: String,
}
