use axum::{
    extract::{DefaultBodyLimit, Request},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod assets;
pub mod request_id;

pub use request_id::{request_id_middleware, RequestId};

use crate::controllers::{health, translate::TranslateController, tts::TtsController};
use crate::infrastructure::config::Config;

/// Largest accepted request body (10 MB)
pub const REQUEST_BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Build the application router.
///
/// API routes and `/health` are matched first; every other path goes to the
/// asset service selected by the environment.
pub fn build_router(
    config: &Config,
    translate_controller: Arc<TranslateController>,
    tts_controller: Arc<TtsController>,
) -> Router {
    let translate_routes = Router::new()
        .route("/api/translate", post(TranslateController::translate))
        .with_state(translate_controller);

    let tts_routes = Router::new()
        .route("/api/tts", post(TtsController::synthesize))
        .with_state(tts_controller);

    let api = Router::new()
        .route("/health", get(health::health))
        .merge(translate_routes)
        .merge(tts_routes);

    let app = if config.is_development() {
        tracing::info!(
            frontend_dev_url = %config.frontend_dev_url,
            "Serving front-end through the dev server"
        );
        api.fallback_service(assets::dev_server_assets(&config.frontend_dev_url))
    } else {
        tracing::info!(
            static_dir = %config.static_dir.display(),
            "Serving pre-built front-end assets"
        );
        api.fallback_service(assets::static_assets(&config.static_dir))
    };

    app.layer(DefaultBodyLimit::max(REQUEST_BODY_LIMIT))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            let request_id = request
                .extensions()
                .get::<RequestId>()
                .map(|id| id.0.as_str())
                .unwrap_or("-");
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id,
            )
        }))
        .layer(middleware::from_fn(request_id_middleware))
}

/// Start the HTTP server and serve until SIGINT/SIGTERM
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
