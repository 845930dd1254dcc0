use std::fmt::Debug;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use log::{error, info};

use crate::error::Unavailable;
use crate::model::Model;

/// A place a serialized model can be read from.
pub trait ArtifactSource: Debug + Send + Sync {
    /// A human-readable location used in log messages.
    fn location(&self) -> String;

    fn read(&self) -> io::Result<Vec<u8>>;
}

/// A model artifact stored in a local file.
#[derive(Debug, Clone)]
pub struct FileArtifact {
    path: PathBuf,
}

impl FileArtifact {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ArtifactSource for FileArtifact {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> io::Result<Vec<u8>> {
        std::fs::read(&self.path)
    }
}

/// Loads a model at most once and shares it for the lifetime of the loader.
///
/// The outcome of the first load, including a failure, is cached.
/// A failed loader never recovers; a new loader must be created instead.
#[derive(Debug)]
pub struct ModelLoader<S = FileArtifact> {
    source: S,
    model: OnceLock<Result<Arc<Model>, Unavailable>>,
}

impl ModelLoader<FileArtifact> {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(FileArtifact::new(path))
    }
}

impl<S: ArtifactSource> ModelLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            model: OnceLock::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn load(&self) -> Result<Arc<Model>, Unavailable> {
        self.model.get_or_init(|| self.read_model()).clone()
    }

    /// Whether a load has been attempted.
    pub fn is_initialized(&self) -> bool {
        self.model.get().is_some()
    }

    fn read_model(&self) -> Result<Arc<Model>, Unavailable> {
        let location = self.source.location();
        let result = self
            .source
            .read()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => Unavailable::NotFound,
                _ => Unavailable::invalid(e.to_string()),
            })
            .and_then(|data| {
                serde_json::from_slice::<Model>(&data).map_err(|e| Unavailable::invalid(e.to_string()))
            });
        match result {
            Ok(model) => {
                info!(
                    "Loaded {} model with {} features from {location}",
                    model.kind(),
                    model.num_features()
                );
                Ok(Arc::new(model))
            }
            Err(Unavailable::NotFound) => {
                error!("Model file '{location}' not found");
                Err(Unavailable::NotFound)
            }
            Err(e) => {
                error!("Error loading model from {location}: {e}");
                Err(e)
            }
        }
    }
}
