use crate::config::ModelSettings;
use crate::registry::LoadError;
use crate::tensor::{InputTensor, PredictionVector, ShapeMismatch};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("input tensor rejected: {0}")]
    Shape(#[from] ShapeMismatch),
    #[error("session mutex poisoned: {0}")]
    Session(String),
    #[error("inference failed: {0}")]
    Execution(String),
}

/// A classifier backend producing one probability per known species.
///
/// Given the same tensor and the same loaded model, `predict` is
/// deterministic.
pub trait ModelService: Send + Sync + 'static {
    fn load(settings: &ModelSettings) -> Result<Self, LoadError>
    where
        Self: Sized;

    fn predict(&self, tensor: &InputTensor) -> Result<PredictionVector, InferenceError>;
}
