use crate::{
    config::Settings, inference_service::InferenceService, labels::LabelSet,
    ort_service::OrtModelService, registry::ModelRegistry, server::HttpServer,
};
use std::{error::Error, sync::Arc};

pub async fn start_app(config: Settings) -> Result<(), Box<dyn Error>> {
    let registry: ModelRegistry<OrtModelService> = ModelRegistry::new(config.model.clone());

    // Load the model before accepting uploads so a missing or corrupt
    // artifact fails the process at startup rather than on the first
    // request.
    if let Err(e) = registry.get_model() {
        tracing::error!("Failed to load model: {}", e);
        return Err(Box::new(e));
    }

    let inference = Arc::new(InferenceService::new(registry, LabelSet::builtin()));

    let server = HttpServer::new(inference, &config.server).await?;
    server.run().await?;

    Ok(())
}
