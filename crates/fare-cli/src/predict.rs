use std::io::Write;

use fare_ml::error::ModelError;
use fare_ml::loader::ArtifactSource;
use fare_ml::profile::CustomerProfile;
use fare_ml::service::FareService;

use crate::report::{blocking_error, write_prediction};

pub(crate) fn run_predict<S, W>(
    service: &FareService<S>,
    profile: &CustomerProfile,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>>
where
    S: ArtifactSource,
    W: Write,
{
    let prediction = match service.predict(profile) {
        Ok(prediction) => prediction,
        Err(ModelError::ModelUnavailable(reason)) => return Err(blocking_error(&reason).into()),
        Err(e) => return Err(e.into()),
    };
    write_prediction(out, profile, &prediction)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use fare_ml::loader::ModelLoader;
    use fare_ml::profile::Smoker;
    use fare_ml::service::ServiceSettings;

    use super::*;

    fn service(dir: &tempfile::TempDir, contents: Option<&str>) -> FareService {
        let path = dir.path().join("model.json");
        if let Some(contents) = contents {
            std::fs::write(&path, contents).unwrap();
        }
        FareService::new(ModelLoader::from_path(path), ServiceSettings::default())
    }

    #[test]
    fn test_run_predict() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(
            &dir,
            Some(r#"{"kind": "linear-regression", "coefficients": [257.73, 321.85, 23848.53], "intercept": -5000.0}"#),
        );
        let mut out = Vec::new();
        let profile = CustomerProfile::try_new(30, 25.0, Smoker::No).unwrap();
        run_predict(&service, &profile, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("$10,778.15"));
        assert!(text.contains("Prediction Insight"));
    }

    #[test]
    fn test_run_predict_without_model() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir, None);
        let mut out = Vec::new();
        let err = run_predict(&service, &CustomerProfile::default(), &mut out).unwrap_err();
        assert!(err.to_string().contains("cannot run without the model (not found)"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_predict_failure() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(
            &dir,
            Some(r#"{"kind": "linear-regression", "coefficients": [1.0], "intercept": 0.0}"#),
        );
        let mut out = Vec::new();
        let err = run_predict(&service, &CustomerProfile::default(), &mut out).unwrap_err();
        assert!(err.to_string().starts_with("prediction failed"));
    }
}
