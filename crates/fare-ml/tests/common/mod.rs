//! Shared fixtures for fare estimation integration tests.

use std::path::PathBuf;

use fare_ml::loader::ModelLoader;
use fare_ml::service::{FareService, ServiceSettings};
use tempfile::TempDir;

/// The coefficients of the shipped insurance model: age, BMI, smoker.
pub const COEFFICIENTS: [f64; 3] = [257.73, 321.85, 23848.53];
pub const INTERCEPT: f64 = -5000.0;

pub fn linear_artifact(coefficients: &[f64], intercept: f64) -> String {
    serde_json::json!({
        "kind": "linear-regression",
        "coefficients": coefficients,
        "intercept": intercept,
    })
    .to_string()
}

/// Writes an artifact into a fresh temporary directory.
/// The directory is removed when the returned [`TempDir`] is dropped.
pub fn write_artifact(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

pub fn service_with_artifact(contents: &str) -> (TempDir, FareService) {
    let (dir, path) = write_artifact(contents);
    let service = FareService::new(ModelLoader::from_path(path), ServiceSettings::default());
    (dir, service)
}

pub fn shipped_service() -> (TempDir, FareService) {
    service_with_artifact(&linear_artifact(&COEFFICIENTS, INTERCEPT))
}
