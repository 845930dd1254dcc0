use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::{ModelError, ModelResult};

pub const AGE_RANGE: RangeInclusive<u32> = 18..=65;
pub const BMI_RANGE: RangeInclusive<f64> = 15.0..=50.0;

pub const DEFAULT_AGE: u32 = 30;
pub const DEFAULT_BMI: f64 = 25.0;

/// The number of features in a [`FeatureVector`].
pub const NUM_FEATURES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Smoker {
    #[default]
    No,
    Yes,
}

impl Smoker {
    /// The numeric encoding used by the model.
    pub fn flag(&self) -> f64 {
        match self {
            Smoker::No => 0.0,
            Smoker::Yes => 1.0,
        }
    }

    pub fn is_smoker(&self) -> bool {
        matches!(self, Smoker::Yes)
    }
}

impl fmt::Display for Smoker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Smoker::No => write!(f, "No"),
            Smoker::Yes => write!(f, "Yes"),
        }
    }
}

impl FromStr for Smoker {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "no" => Ok(Smoker::No),
            "yes" => Ok(Smoker::Yes),
            _ => Err(ModelError::invalid(format!(
                "smoker status must be one of 'No' or 'Yes': {s}"
            ))),
        }
    }
}

/// The model input, in the order the model was trained with:
/// age, BMI, smoker flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; NUM_FEATURES]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// A validated customer profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomerProfile {
    age: u32,
    bmi: f64,
    smoker: Smoker,
}

impl CustomerProfile {
    pub fn try_new(age: u32, bmi: f64, smoker: Smoker) -> ModelResult<Self> {
        validate_age(age)?;
        validate_bmi(bmi)?;
        Ok(Self { age, bmi, smoker })
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn bmi(&self) -> f64 {
        self.bmi
    }

    pub fn smoker(&self) -> Smoker {
        self.smoker
    }

    pub fn features(&self) -> FeatureVector {
        FeatureVector([f64::from(self.age), self.bmi, self.smoker.flag()])
    }
}

impl Default for CustomerProfile {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE,
            bmi: DEFAULT_BMI,
            smoker: Smoker::No,
        }
    }
}

pub fn validate_age(age: u32) -> ModelResult<u32> {
    if AGE_RANGE.contains(&age) {
        Ok(age)
    } else {
        Err(ModelError::invalid(format!(
            "age must be between {} and {}: {age}",
            AGE_RANGE.start(),
            AGE_RANGE.end()
        )))
    }
}

/// Validates a BMI value. `NaN` is never within range.
pub fn validate_bmi(bmi: f64) -> ModelResult<f64> {
    if BMI_RANGE.contains(&bmi) {
        Ok(bmi)
    } else {
        Err(ModelError::invalid(format!(
            "BMI must be between {:.1} and {:.1}: {bmi}",
            BMI_RANGE.start(),
            BMI_RANGE.end()
        )))
    }
}
