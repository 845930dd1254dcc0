use std::io::Write;

use fare_ml::error::ModelError;
use fare_ml::loader::ArtifactSource;
use fare_ml::service::FareService;
use log::warn;

use crate::report::{blocking_error, insights_unavailable, write_insights};

/// Prints the model insights panel.
///
/// An incompatible model only degrades the panel. A missing model is an error.
pub(crate) fn run_insights<S, W>(
    service: &FareService<S>,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>>
where
    S: ArtifactSource,
    W: Write,
{
    match service.insights() {
        Ok(insights) => write_insights(out, &insights)?,
        Err(ModelError::ModelUnavailable(reason)) => {
            writeln!(
                out,
                "{}",
                insights_unavailable("the model file has not been loaded successfully")
            )?;
            return Err(blocking_error(&reason).into());
        }
        Err(e) => {
            warn!("{e}");
            writeln!(out, "{}", insights_unavailable(&e))?;
        }
    }
    Ok(())
}
