use crate::{
    config::ModelSettings,
    model_service::{InferenceError, ModelService},
    registry::LoadError,
    tensor::{InputTensor, PredictionVector, ShapeMismatch, INPUT_SHAPE},
};
use ort::{
    session::{builder::GraphOptimizationLevel, Session},
    value::TensorRef,
};
use std::path::Path;
use std::sync::Mutex;

/// ONNX Runtime backend for the species classifier.
///
/// `Session::run` needs exclusive access, so the session sits behind a
/// mutex; requests are serialized through it.
pub struct OrtModelService {
    session: Mutex<Session>,
    output_name: String,
}

fn build_session(model_path: &Path) -> Result<Session, ort::Error> {
    Session::builder()?
        .with_optimization_level(GraphOptimizationLevel::Level3)?
        .commit_from_file(model_path)
}

impl ModelService for OrtModelService {
    fn load(settings: &ModelSettings) -> Result<Self, LoadError> {
        let model_path = settings.get_model_path();
        let session =
            build_session(&model_path).map_err(|e| LoadError::Malformed(e.to_string()))?;

        let output_name = session
            .outputs()
            .first()
            .map(|output| output.name().to_string())
            .ok_or_else(|| LoadError::Malformed("model declares no outputs".into()))?;

        tracing::info!("Created ONNX session from {:?}", model_path);

        Ok(Self {
            session: Mutex::new(session),
            output_name,
        })
    }

    fn predict(&self, tensor: &InputTensor) -> Result<PredictionVector, InferenceError> {
        if tensor.shape() != &INPUT_SHAPE {
            return Err(InferenceError::Shape(ShapeMismatch {
                expected: INPUT_SHAPE,
                got: tensor.shape().to_vec(),
            }));
        }

        let mut session = self
            .session
            .lock()
            .map_err(|e| InferenceError::Session(e.to_string()))?;

        let tensor_ref = TensorRef::from_array_view(tensor.view())
            .map_err(|e| InferenceError::Execution(format!("failed to build tensor: {}", e)))?;

        let outputs = session
            .run(ort::inputs![tensor_ref])
            .map_err(|e| InferenceError::Execution(format!("inference failed: {}", e)))?;

        let (_, scores) = outputs[self.output_name.as_str()]
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError::Execution(format!("failed to extract output: {}", e)))?;

        Ok(PredictionVector::new(scores.to_vec()))
    }
}
