use crate::{
    inference_service::ClassifyError, interpreter::Classification, model_service::ModelService,
    server::SharedState,
};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::instrument;

impl IntoResponse for ClassifyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ClassifyError::Image(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

/// Accepts raw JPEG or PNG bytes and responds with the predicted species,
/// its confidence percentage, and the confidence tier.
#[instrument(skip(state, image_data))]
pub async fn classify_image<M: ModelService>(
    State(state): State<SharedState<M>>,
    image_data: Bytes,
) -> Result<Json<Classification>, ClassifyError> {
    let classification = state.inference.classify(&image_data)?;

    Ok(Json(classification))
}
