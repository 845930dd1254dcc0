use crate::profile::CustomerProfile;

/// BMI values at or above this threshold are classified as obese.
pub const HIGH_BMI_THRESHOLD: f64 = 30.0;

/// Guidance shown next to a prediction.
/// It does not affect the predicted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskNotice {
    SmokerWarning,
    HighBmiWarning,
    LowRisk,
}

impl RiskNotice {
    pub fn classify(profile: &CustomerProfile) -> Self {
        if profile.smoker().is_smoker() {
            RiskNotice::SmokerWarning
        } else if profile.bmi() >= HIGH_BMI_THRESHOLD {
            RiskNotice::HighBmiWarning
        } else {
            RiskNotice::LowRisk
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            RiskNotice::SmokerWarning => "Smoker Warning",
            RiskNotice::HighBmiWarning => "Health Note",
            RiskNotice::LowRisk => "Prediction Insight",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RiskNotice::SmokerWarning => {
                "The predicted charge is significantly higher due to the customer's smoker status."
            }
            RiskNotice::HighBmiWarning => {
                "A BMI of 30 or higher is contributing to increased charges."
            }
            RiskNotice::LowRisk => {
                "The customer profile suggests relatively lower risk factors (non-smoker, healthy BMI)."
            }
        }
    }
}
