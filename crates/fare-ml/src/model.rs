//! Trained models that can be loaded from an artifact.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// A trained linear regression model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressionModel {
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearRegressionModel {
    /// Create a new trained model.
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    /// Get the model coefficients.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Get the model intercept.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Get the number of features.
    pub fn num_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Predict for a single sample.
    /// The caller must ensure that the number of features matches.
    pub fn predict(&self, features: &[f64]) -> f64 {
        let mut prediction = self.intercept;
        for (coef, feat) in self.coefficients.iter().zip(features.iter()) {
            prediction += coef * feat;
        }
        prediction
    }
}

/// A baseline model that predicts the same value for every sample,
/// typically the mean label of the training data.
///
/// It has no coefficients or intercept to report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantModel {
    value: f64,
    num_features: usize,
}

impl ConstantModel {
    pub fn new(value: f64, num_features: usize) -> Self {
        Self {
            value,
            num_features,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn num_features(&self) -> usize {
        self.num_features
    }
}

/// A model loaded from an artifact.
///
/// The artifact is tagged by `kind`, for example:
///
/// ```json
/// {"kind": "linear-regression", "coefficients": [257.73, 321.85, 23848.53], "intercept": -5000.0}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Model {
    LinearRegression(LinearRegressionModel),
    Constant(ConstantModel),
}

impl Model {
    pub fn kind(&self) -> &'static str {
        match self {
            Model::LinearRegression(_) => "linear-regression",
            Model::Constant(_) => "constant",
        }
    }

    pub fn num_features(&self) -> usize {
        match self {
            Model::LinearRegression(m) => m.num_features(),
            Model::Constant(m) => m.num_features(),
        }
    }

    /// Predict for a single sample.
    ///
    /// The feature count must match the model. The feature order is not
    /// checked and must be the order the model was trained with.
    pub fn predict(&self, features: &[f64]) -> ModelResult<f64> {
        if features.len() != self.num_features() {
            return Err(ModelError::prediction(format!(
                "expected {} features but got {}",
                self.num_features(),
                features.len()
            )));
        }
        let prediction = match self {
            Model::LinearRegression(m) => m.predict(features),
            Model::Constant(m) => m.value(),
        };
        if !prediction.is_finite() {
            return Err(ModelError::prediction(format!(
                "non-finite prediction: {prediction}"
            )));
        }
        Ok(prediction)
    }

    /// Interpret the model as a linear regression model.
    pub fn as_linear(&self) -> ModelResult<&LinearRegressionModel> {
        match self {
            Model::LinearRegression(m) => Ok(m),
            other => Err(ModelError::incompatible(format!(
                "a {} model has no coefficients or intercept",
                other.kind()
            ))),
        }
    }

    /// Whether the model exposes the parameters needed for inspection.
    pub fn is_linear(&self) -> bool {
        matches!(self, Model::LinearRegression(_))
    }
}

impl From<LinearRegressionModel> for Model {
    fn from(model: LinearRegressionModel) -> Self {
        Model::LinearRegression(model)
    }
}

impl From<ConstantModel> for Model {
    fn from(model: ConstantModel) -> Self {
        Model::Constant(model)
    }
}
