use crate::{
    config::ServerSettings, inference_service::InferenceService, model_service::ModelService,
    routes::api_routes,
};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

pub struct SharedState<M: ModelService> {
    pub inference: Arc<InferenceService<M>>,
}

impl<M: ModelService> Clone for SharedState<M> {
    fn clone(&self) -> Self {
        Self {
            inference: self.inference.clone(),
        }
    }
}

pub struct HttpServer {
    router: Router,
    listener: TcpListener,
}

impl HttpServer {
    pub async fn new<M: ModelService>(
        inference: Arc<InferenceService<M>>,
        config: &ServerSettings,
    ) -> anyhow::Result<Self> {
        let app_state = SharedState { inference };

        let router = Router::new().merge(api_routes::<M>()).with_state(app_state);
        let listener = TcpListener::bind(config.get_address()).await?;

        Ok(Self { router, listener })
    }

    pub async fn run(self) -> anyhow::Result<()> {
        tracing::info!("Listening on {}", self.listener.local_addr()?);

        axum::serve(self.listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
