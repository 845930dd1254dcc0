use std::sync::Arc;

use fare_common::config::AppConfig;

use crate::error::{ModelError, ModelResult, Unavailable};
use crate::insights::{insights, ModelInsights};
use crate::loader::{ArtifactSource, FileArtifact, ModelLoader};
use crate::model::Model;
use crate::prediction::{validate_minimum_charge, Prediction, Predictor, MINIMUM_CHARGE};
use crate::profile::CustomerProfile;

/// The availability of the model behind a [`FareService`].
#[derive(Debug, Clone)]
pub enum ServiceState {
    Ready(Arc<Model>),
    /// The model could not be loaded. Only a new process can recover.
    Degraded(Unavailable),
}

impl ServiceState {
    pub fn is_ready(&self) -> bool {
        matches!(self, ServiceState::Ready(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceSettings {
    r2_score: f64,
    minimum_charge: f64,
}

impl ServiceSettings {
    pub fn try_new(r2_score: f64, minimum_charge: f64) -> ModelResult<Self> {
        Ok(Self {
            r2_score: validate_r2_score(r2_score)?,
            minimum_charge: validate_minimum_charge(minimum_charge)?,
        })
    }

    /// The declared R² score of the model, between 0 and 1.
    pub fn r2_score(&self) -> f64 {
        self.r2_score
    }

    pub fn minimum_charge(&self) -> f64 {
        self.minimum_charge
    }
}

fn validate_r2_score(r2_score: f64) -> ModelResult<f64> {
    if (0.0..=1.0).contains(&r2_score) {
        Ok(r2_score)
    } else {
        Err(ModelError::invalid(format!(
            "R\u{b2} score must be between 0 and 1: {r2_score}"
        )))
    }
}

/// Fare estimation over a model that is loaded on first use.
#[derive(Debug)]
pub struct FareService<S = FileArtifact> {
    loader: ModelLoader<S>,
    settings: ServiceSettings,
}

impl FareService<FileArtifact> {
    /// Creates the service for the configured artifact.
    /// The model itself is not read until it is first needed.
    pub fn try_from_config(config: &AppConfig) -> ModelResult<Self> {
        let settings =
            ServiceSettings::try_new(config.model.r2_score, config.prediction.minimum_charge)?;
        Ok(Self::new(
            ModelLoader::from_path(config.model.path.clone()),
            settings,
        ))
    }
}

impl<S: ArtifactSource> FareService<S> {
    pub fn new(loader: ModelLoader<S>, settings: ServiceSettings) -> Self {
        Self { loader, settings }
    }

    pub fn state(&self) -> ServiceState {
        match self.loader.load() {
            Ok(model) => ServiceState::Ready(model),
            Err(e) => ServiceState::Degraded(e),
        }
    }

    pub fn predictor(&self) -> ModelResult<Predictor> {
        let model = self.loader.load()?;
        Predictor::new(model).with_minimum_charge(self.settings.minimum_charge)
    }

    pub fn predict(&self, profile: &CustomerProfile) -> ModelResult<Prediction> {
        self.predictor()?.predict(profile)
    }

    pub fn insights(&self) -> ModelResult<ModelInsights> {
        let model = self.loader.load()?;
        insights(&model, self.settings.r2_score)
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            r2_score: 0.72,
            minimum_charge: MINIMUM_CHARGE,
        }
    }
}
