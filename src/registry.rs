use crate::config::ModelSettings;
use crate::model_service::ModelService;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("model artifact not found: {0:?}")]
    NotFound(PathBuf),
    #[error("failed to load model artifact: {0}")]
    Malformed(String),
    #[error("model registry mutex poisoned: {0}")]
    Registry(String),
}

/// Process-wide cache for the model backend.
///
/// The backend is loaded from disk on the first `get_model` call and the
/// same handle is returned on every call after that. Initialization is
/// mutex-guarded so concurrent first calls cannot race a duplicate load,
/// and a failed load caches nothing.
pub struct ModelRegistry<M> {
    settings: ModelSettings,
    handle: Mutex<Option<Arc<M>>>,
}

impl<M: ModelService> ModelRegistry<M> {
    pub fn new(settings: ModelSettings) -> Self {
        Self {
            settings,
            handle: Mutex::new(None),
        }
    }

    pub fn get_model(&self) -> Result<Arc<M>, LoadError> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| LoadError::Registry(e.to_string()))?;

        if let Some(model) = handle.as_ref() {
            return Ok(model.clone());
        }

        let path = self.settings.get_model_path();
        if !path.exists() {
            return Err(LoadError::NotFound(path));
        }

        let model = Arc::new(M::load(&self.settings)?);
        *handle = Some(model.clone());
        tracing::info!("Loaded model artifact from {:?}", path);

        Ok(model)
    }
}
