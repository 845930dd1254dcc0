use crate::error::{ModelError, ModelResult};
use crate::model::Model;
use crate::profile::NUM_FEATURES;

/// Display names of the model features, in training order.
pub const FEATURE_NAMES: [&str; NUM_FEATURES] = ["Age", "BMI", "Smoker (Yes)"];

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCoefficient {
    pub name: String,
    /// The increase in charges for a one-unit increase of the feature.
    pub coefficient: f64,
}

/// The learned parameters of the loaded model, for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInsights {
    coefficients: Vec<FeatureCoefficient>,
    intercept: f64,
    r2_score: f64,
}

impl ModelInsights {
    pub fn coefficients(&self) -> &[FeatureCoefficient] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// The declared R² score. It is configuration and is not derived from the model.
    pub fn r2_score(&self) -> f64 {
        self.r2_score
    }

    /// Features ordered by the magnitude of their coefficient, largest first.
    pub fn ranked_by_impact(&self) -> Vec<&FeatureCoefficient> {
        let mut ranked = self.coefficients.iter().collect::<Vec<_>>();
        ranked.sort_by(|a, b| b.coefficient.abs().total_cmp(&a.coefficient.abs()));
        ranked
    }
}

/// Projects the parameters of a linear model onto the known feature names.
///
/// Fails if the model is not linear or if its coefficient count
/// differs from the number of feature names.
pub fn insights(model: &Model, r2_score: f64) -> ModelResult<ModelInsights> {
    let linear = model.as_linear()?;
    let coefficients = linear.coefficients();
    if coefficients.len() != FEATURE_NAMES.len() {
        return Err(ModelError::incompatible(format!(
            "model has {} coefficients but {} features are expected: {}",
            coefficients.len(),
            FEATURE_NAMES.len(),
            FEATURE_NAMES.join(", ")
        )));
    }
    let coefficients = FEATURE_NAMES
        .iter()
        .zip(coefficients)
        .map(|(name, coefficient)| FeatureCoefficient {
            name: name.to_string(),
            coefficient: *coefficient,
        })
        .collect();
    Ok(ModelInsights {
        coefficients,
        intercept: linear.intercept(),
        r2_score,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{ConstantModel, LinearRegressionModel};

    fn names(features: &[&FeatureCoefficient]) -> Vec<String> {
        features.iter().map(|f| f.name.clone()).collect()
    }

    #[test]
    fn test_insights() {
        let model = Model::from(LinearRegressionModel::new(
            vec![257.73, 321.85, 23848.53],
            -5000.0,
        ));
        let insights = insights(&model, 0.72).unwrap();
        let pairs = insights
            .coefficients()
            .iter()
            .map(|f| (f.name.as_str(), f.coefficient))
            .collect::<Vec<_>>();
        assert_eq!(
            pairs,
            vec![("Age", 257.73), ("BMI", 321.85), ("Smoker (Yes)", 23848.53)]
        );
        assert_eq!(insights.intercept(), -5000.0);
        assert_eq!(insights.r2_score(), 0.72);
    }

    #[test]
    fn test_ranked_by_impact() {
        let model = Model::from(LinearRegressionModel::new(
            vec![257.73, -321.85, 23848.53],
            0.0,
        ));
        let insights = insights(&model, 0.72).unwrap();
        assert_eq!(
            names(&insights.ranked_by_impact()),
            vec!["Smoker (Yes)", "BMI", "Age"]
        );
    }

    #[test]
    fn test_coefficient_count_mismatch() {
        for coefficients in [vec![], vec![1.0, 2.0], vec![1.0, 2.0, 3.0, 4.0]] {
            let model = Model::from(LinearRegressionModel::new(coefficients, 0.0));
            assert!(matches!(
                insights(&model, 0.72),
                Err(ModelError::ModelIncompatible(_))
            ));
        }
    }

    #[test]
    fn test_non_linear_model() {
        let model = Model::from(ConstantModel::new(1.0, 3));
        assert!(matches!(
            insights(&model, 0.72),
            Err(ModelError::ModelIncompatible(_))
        ));
    }
}
