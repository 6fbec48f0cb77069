use crate::{model_service::ModelService, server::SharedState};
use axum::{extract::State, response::Json};

/// Lists the species the classifier can recognize, in model output order.
pub async fn list_species<M: ModelService>(
    State(state): State<SharedState<M>>,
) -> Json<Vec<&'static str>> {
    Json(state.inference.labels().names().to_vec())
}
