use std::sync::Arc;

use log::{debug, warn};

use crate::error::{ModelError, ModelResult};
use crate::format::format_currency;
use crate::model::Model;
use crate::profile::CustomerProfile;

/// The default lower bound of a displayed charge.
/// A linear model can produce implausibly low or negative values
/// for profiles far from the training data.
pub const MINIMUM_CHARGE: f64 = 500.0;

/// Validates a configured floor. The floor must be a finite, non-negative amount.
pub fn validate_minimum_charge(minimum_charge: f64) -> ModelResult<f64> {
    if minimum_charge.is_finite() && minimum_charge >= 0.0 {
        Ok(minimum_charge)
    } else {
        Err(ModelError::invalid(format!(
            "minimum charge must be a non-negative amount: {minimum_charge}"
        )))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    raw: f64,
    charge: f64,
    trusted: bool,
}

impl Prediction {
    /// The model output before the floor is applied.
    pub fn raw(&self) -> f64 {
        self.raw
    }

    /// The estimated charge, never below the configured minimum.
    pub fn charge(&self) -> f64 {
        self.charge
    }

    pub fn is_floored(&self) -> bool {
        self.raw < self.charge
    }

    /// Whether the prediction comes from an inspectable linear model.
    pub fn is_trusted(&self) -> bool {
        self.trusted
    }

    pub fn formatted(&self) -> String {
        format_currency(self.charge)
    }
}

#[derive(Debug, Clone)]
pub struct Predictor {
    model: Arc<Model>,
    minimum_charge: f64,
}

impl Predictor {
    pub fn new(model: Arc<Model>) -> Self {
        Self {
            model,
            minimum_charge: MINIMUM_CHARGE,
        }
    }

    pub fn with_minimum_charge(mut self, minimum_charge: f64) -> ModelResult<Self> {
        self.minimum_charge = validate_minimum_charge(minimum_charge)?;
        Ok(self)
    }

    pub fn minimum_charge(&self) -> f64 {
        self.minimum_charge
    }

    pub fn predict(&self, profile: &CustomerProfile) -> ModelResult<Prediction> {
        let features = profile.features();
        let raw = self.model.predict(features.as_slice())?;
        let trusted = self.model.is_linear();
        if !trusted {
            warn!(
                "prediction from a {} model cannot be inspected and should not be trusted",
                self.model.kind()
            );
        }
        let prediction = Prediction {
            raw,
            charge: raw.max(self.minimum_charge),
            trusted,
        };
        debug!("features={features:?} raw={raw} charge={}", prediction.charge);
        Ok(prediction)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{ConstantModel, LinearRegressionModel};
    use crate::profile::Smoker;

    fn predictor(coefficients: Vec<f64>, intercept: f64) -> Predictor {
        Predictor::new(Arc::new(Model::from(LinearRegressionModel::new(
            coefficients,
            intercept,
        ))))
    }

    #[test]
    fn test_predict_above_floor() {
        let predictor = predictor(vec![100.0, 10.0, 1000.0], 0.0);
        let profile = CustomerProfile::try_new(20, 20.0, Smoker::Yes).unwrap();
        let prediction = predictor.predict(&profile).unwrap();
        assert_eq!(prediction.raw(), 3200.0);
        assert_eq!(prediction.charge(), 3200.0);
        assert!(!prediction.is_floored());
        assert!(prediction.is_trusted());
        assert_eq!(prediction.formatted(), "$3,200.00");
    }

    #[test]
    fn test_predict_floor() {
        let predictor = predictor(vec![1.0, 1.0, 1.0], -10000.0);
        let prediction = predictor.predict(&CustomerProfile::default()).unwrap();
        assert_eq!(prediction.raw(), -9945.0);
        assert_eq!(prediction.charge(), 500.0);
        assert!(prediction.is_floored());
        assert_eq!(prediction.formatted(), "$500.00");
    }

    #[test]
    fn test_predict_custom_floor() {
        let predictor = predictor(vec![0.0, 0.0, 0.0], 800.0)
            .with_minimum_charge(1000.0)
            .unwrap();
        let prediction = predictor.predict(&CustomerProfile::default()).unwrap();
        assert_eq!(prediction.charge(), 1000.0);
        assert_eq!(predictor.minimum_charge(), 1000.0);
    }

    #[test]
    fn test_invalid_floor() {
        for floor in [-1000000.0, -0.01, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                predictor(vec![0.0, 0.0, 0.0], -20000.0).with_minimum_charge(floor),
                Err(ModelError::InvalidArgument(_))
            ));
        }
        let predictor = predictor(vec![0.0, 0.0, 0.0], -20000.0)
            .with_minimum_charge(0.0)
            .unwrap();
        assert_eq!(predictor.predict(&CustomerProfile::default()).unwrap().charge(), 0.0);
    }

    #[test]
    fn test_predict_wrong_shape() {
        let predictor = predictor(vec![257.73, 321.85], -5000.0);
        assert!(matches!(
            predictor.predict(&CustomerProfile::default()),
            Err(ModelError::PredictionFailed(_))
        ));
    }

    #[test]
    fn test_predict_untrusted_model() {
        let predictor = Predictor::new(Arc::new(Model::from(ConstantModel::new(13270.42, 3))));
        let prediction = predictor.predict(&CustomerProfile::default()).unwrap();
        assert_eq!(prediction.charge(), 13270.42);
        assert!(!prediction.is_trusted());
    }
}
