use std::io::{self, Write};

use comfy_table::{CellAlignment, Table};
use fare_ml::error::Unavailable;
use fare_ml::format::{format_currency, format_percent};
use fare_ml::insights::ModelInsights;
use fare_ml::notice::RiskNotice;
use fare_ml::prediction::Prediction;
use fare_ml::profile::CustomerProfile;

pub(crate) const DISCLAIMER: &str = "This prediction is based on a simple Linear Regression model \
using only Age, BMI, and Smoker status. For a more accurate quote, more features \
(like region, number of children, etc.) would be required.";

pub(crate) fn blocking_error(reason: &Unavailable) -> String {
    format!(
        "Application cannot run without the model ({reason}). \
         Check the model path and the load error above."
    )
}

pub(crate) fn write_prediction<W: Write>(
    out: &mut W,
    profile: &CustomerProfile,
    prediction: &Prediction,
) -> io::Result<()> {
    writeln!(
        out,
        "Customer Profile: age {}, BMI {:.2}, smoker {}",
        profile.age(),
        profile.bmi(),
        profile.smoker()
    )?;
    writeln!(out)?;
    writeln!(out, "The Estimated Annual Insurance Charge is: {}", prediction.formatted())?;
    if prediction.is_floored() {
        writeln!(
            out,
            "The model estimate of {} was raised to the minimum charge.",
            format_currency(prediction.raw())
        )?;
    }
    if !prediction.is_trusted() {
        writeln!(
            out,
            "Warning: the loaded model does not expose its coefficients; treat this estimate with caution."
        )?;
    }
    let notice = RiskNotice::classify(profile);
    writeln!(out, "{}: {}", notice.title(), notice.message())?;
    writeln!(out)?;
    writeln!(out, "{DISCLAIMER}")
}

pub(crate) fn write_insights<W: Write>(out: &mut W, insights: &ModelInsights) -> io::Result<()> {
    writeln!(out, "Model Insights: Linear Regression Details")?;

    let mut table = Table::new();
    table.load_preset("||--+-++|    ++++++");
    table.set_header(vec!["Feature", "Coefficient (Increase in Charges)"]);
    for feature in insights.coefficients() {
        table.add_row(vec![
            feature.name.clone(),
            format!("{:.2}", feature.coefficient),
        ]);
    }
    table.column_iter_mut().enumerate().for_each(|(i, c)| {
        let alignment = match i {
            0 => CellAlignment::Left,
            _ => CellAlignment::Right,
        };
        c.set_cell_alignment(alignment);
    });
    writeln!(out, "{table}")?;
    writeln!(
        out,
        "These values indicate how much each feature (when increased by one unit) \
         contributes to the total predicted charge."
    )?;
    writeln!(out, "Intercept: {}", format_currency(insights.intercept()))?;
    writeln!(
        out,
        "Model R\u{b2} Score (Test Data): {}",
        format_percent(insights.r2_score())
    )?;
    writeln!(out, "Impact ranking:")?;
    for (i, feature) in insights.ranked_by_impact().iter().enumerate() {
        writeln!(
            out,
            "  {}. {}: {} per unit",
            i + 1,
            feature.name,
            format_currency(feature.coefficient)
        )?;
    }
    Ok(())
}

/// The line printed when insights cannot be shown.
pub(crate) fn insights_unavailable(reason: impl std::fmt::Display) -> String {
    format!("Model details cannot be displayed: {reason}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use fare_ml::insights::insights;
    use fare_ml::model::{LinearRegressionModel, Model};
    use fare_ml::prediction::{Predictor, MINIMUM_CHARGE};
    use fare_ml::profile::Smoker;

    use super::*;

    fn shipped_model() -> Arc<Model> {
        Arc::new(Model::from(LinearRegressionModel::new(
            vec![257.73, 321.85, 23848.53],
            -5000.0,
        )))
    }

    #[test]
    fn test_write_prediction() {
        let profile = CustomerProfile::try_new(30, 25.0, Smoker::Yes).unwrap();
        let prediction = Predictor::new(shipped_model()).predict(&profile).unwrap();
        let mut out = Vec::new();
        write_prediction(&mut out, &profile, &prediction).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("The Estimated Annual Insurance Charge is: $34,626.68"));
        assert!(text.contains("Smoker Warning"));
        assert!(text.contains(DISCLAIMER));
        assert!(!text.contains("minimum charge"));
    }

    #[test]
    fn test_write_floored_prediction() {
        let model = Arc::new(Model::from(LinearRegressionModel::new(
            vec![0.0, 0.0, 0.0],
            -20.0,
        )));
        let profile = CustomerProfile::default();
        let prediction = Predictor::new(model).predict(&profile).unwrap();
        let mut out = Vec::new();
        write_prediction(&mut out, &profile, &prediction).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("$500.00"));
        assert!(text.contains("The model estimate of -$20.00 was raised to the minimum charge."));
        assert_eq!(MINIMUM_CHARGE, prediction.charge());
    }

    #[test]
    fn test_write_insights() {
        let insights = insights(&shipped_model(), 0.72).unwrap();
        let mut out = Vec::new();
        write_insights(&mut out, &insights).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Smoker (Yes)"));
        assert!(text.contains("23848.53"));
        assert!(text.contains("Intercept: -$5,000.00"));
        assert!(text.contains("72.0%"));
        assert!(text.contains("1. Smoker (Yes): $23,848.53 per unit"));
        assert!(text.contains("3. Age: $257.73 per unit"));
    }
}
