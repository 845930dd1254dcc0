use std::fmt::Display;
use std::io::{self, BufRead, Write};

use fare_common::config::FormConfig;
use fare_ml::error::{ModelError, ModelResult};
use fare_ml::loader::ArtifactSource;
use fare_ml::profile::{validate_age, validate_bmi, CustomerProfile, Smoker};
use fare_ml::service::FareService;

use crate::insights::run_insights;
use crate::predict::run_predict;

pub(crate) const AGE_HELP: &str = "Enter the customer's age (18-65).";
pub(crate) const BMI_HELP: &str = "Enter BMI. Values > 30 are often classified as obese.";
pub(crate) const SMOKER_HELP: &str = "Enter the smoker status (No or Yes).";

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FormDefaults {
    pub age: u32,
    pub bmi: f64,
    pub smoker: Smoker,
}

impl FormDefaults {
    pub fn try_from_config(config: &FormConfig) -> ModelResult<Self> {
        Ok(Self {
            age: validate_age(config.default_age)?,
            bmi: validate_bmi(config.default_bmi)?,
            smoker: config.default_smoker.parse()?,
        })
    }
}

/// Shows the insights panel, asks for a customer profile, and prints the estimate.
///
/// The form is not shown when the model is unavailable; only the insights
/// notice and the blocking error are reported.
pub(crate) fn run_form<S, R, W>(
    service: &FareService<S>,
    defaults: &FormDefaults,
    input: &mut R,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>>
where
    S: ArtifactSource,
    R: BufRead,
    W: Write,
{
    run_insights(service, out)?;
    writeln!(out)?;
    let profile = read_profile(input, out, defaults)?;
    writeln!(out)?;
    run_predict(service, &profile, out)
}

/// Reads a customer profile field by field.
/// Empty input selects the default and invalid input asks again.
pub(crate) fn read_profile<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    defaults: &FormDefaults,
) -> Result<CustomerProfile, Box<dyn std::error::Error>> {
    writeln!(out, "Customer Profile")?;
    let age = prompt(input, out, "1. Age", AGE_HELP, defaults.age, |s| {
        let age = s
            .parse::<u32>()
            .map_err(|e| ModelError::invalid(format!("age: {e}")))?;
        validate_age(age)
    })?;
    let bmi = prompt(
        input,
        out,
        "2. BMI (Body Mass Index)",
        BMI_HELP,
        defaults.bmi,
        |s| {
            let bmi = s
                .parse::<f64>()
                .map_err(|e| ModelError::invalid(format!("BMI: {e}")))?;
            validate_bmi(bmi)
        },
    )?;
    let smoker = prompt(
        input,
        out,
        "3. Smoker Status",
        SMOKER_HELP,
        defaults.smoker,
        |s| s.parse::<Smoker>(),
    )?;
    Ok(CustomerProfile::try_new(age, bmi, smoker)?)
}

fn prompt<R, W, T, F>(
    input: &mut R,
    out: &mut W,
    label: &str,
    help: &str,
    default: T,
    parse: F,
) -> io::Result<T>
where
    R: BufRead,
    W: Write,
    T: Display + Copy,
    F: Fn(&str) -> ModelResult<T>,
{
    writeln!(out, "{help}")?;
    loop {
        write!(out, "{label} [{default}]: ")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "the form was closed before it was submitted",
            ));
        }
        let line = line.trim();
        if line.is_empty() {
            return Ok(default);
        }
        match parse(line) {
            Ok(value) => return Ok(value),
            Err(e) => writeln!(out, "{e}")?,
        }
    }
}
