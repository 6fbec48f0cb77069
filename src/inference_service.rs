use crate::{
    interpreter::{interpret, Classification, EmptyVectorError},
    labels::LabelSet,
    model_service::{InferenceError, ModelService},
    preprocess::{preprocess, InvalidImageError},
    registry::{LoadError, ModelRegistry},
};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("model unavailable: {0}")]
    Model(#[from] LoadError),
    #[error("invalid image: {0}")]
    Image(#[from] InvalidImageError),
    #[error("inference failed: {0}")]
    Inference(#[from] InferenceError),
    #[error("uninterpretable prediction: {0}")]
    Interpret(#[from] EmptyVectorError),
}

/// Runs one uploaded image through preprocessing, the model, and
/// interpretation. Stateless per request; only the model handle is shared.
pub struct InferenceService<M: ModelService> {
    registry: Arc<ModelRegistry<M>>,
    labels: Arc<LabelSet>,
}

impl<M: ModelService> Clone for InferenceService<M> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            labels: self.labels.clone(),
        }
    }
}

impl<M: ModelService> InferenceService<M> {
    pub fn new(registry: ModelRegistry<M>, labels: LabelSet) -> Self {
        Self {
            registry: Arc::new(registry),
            labels: Arc::new(labels),
        }
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    pub fn classify(&self, image_data: &[u8]) -> Result<Classification, ClassifyError> {
        let model = self.registry.get_model()?;
        let tensor = preprocess(image_data)?;
        let vector = model.predict(&tensor)?;
        let classification = interpret(&vector, &self.labels)?;

        tracing::debug!(
            "Classified upload as {} at {:.2}% confidence",
            classification.species,
            classification.confidence
        );

        Ok(classification)
    }
}
