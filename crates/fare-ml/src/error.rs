use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

/// The reason a model artifact could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unavailable {
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    Invalid(String),
}

impl Unavailable {
    pub fn invalid(message: impl Into<String>) -> Self {
        Unavailable::Invalid(message.into())
    }

    /// The user-facing reason text.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("model unavailable: {0}")]
    ModelUnavailable(#[from] Unavailable),
    #[error("model incompatible: {0}")]
    ModelIncompatible(String),
    #[error("prediction failed: {0}")]
    PredictionFailed(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ModelError {
    pub fn incompatible(message: impl Into<String>) -> Self {
        ModelError::ModelIncompatible(message.into())
    }

    pub fn prediction(message: impl Into<String>) -> Self {
        ModelError::PredictionFailed(message.into())
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        ModelError::InvalidArgument(message.into())
    }
}
