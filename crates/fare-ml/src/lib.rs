//! Fare estimation with a pre-trained linear regression model.

pub mod error;
pub mod format;
pub mod insights;
pub mod loader;
pub mod model;
pub mod notice;
pub mod prediction;
pub mod profile;
pub mod service;
