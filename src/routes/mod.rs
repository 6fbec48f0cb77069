mod classify;
mod health;
mod species;

use crate::{model_service::ModelService, server::SharedState};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn api_routes<M: ModelService>() -> Router<SharedState<M>> {
    Router::new()
        .route("/healthcheck", get(health::healthcheck))
        .route("/species", get(species::list_species::<M>))
        .route(
            "/classify",
            post(classify::classify_image::<M>).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
}
