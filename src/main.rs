use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use sarvam_proxy::controllers::{translate::TranslateController, tts::TtsController};
use sarvam_proxy::domain::{translation::TranslationService, tts::TtsService};
use sarvam_proxy::infrastructure::config::{Config, LogFormat};
use sarvam_proxy::infrastructure::http::{build_router, start_http_server};
use sarvam_proxy::infrastructure::repositories::SarvamRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Sarvam proxy on {}:{} ({:?})",
        config.host,
        config.port,
        config.environment
    );

    if !config.has_api_key() {
        tracing::warn!("SARVAM_API_KEY is not set. Requests will be forwarded without a credential and rejected upstream.");
    }

    match config.upstream_timeout() {
        Some(timeout) => tracing::info!(timeout_secs = timeout.as_secs(), "Upstream timeout configured"),
        None => tracing::warn!("Upstream timeout disabled; a hung Sarvam API call will never complete"),
    }

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate the Sarvam client (credential injected once)
    let sarvam_repo = Arc::new(SarvamRepository::new(
        config.sarvam_base_url.clone(),
        config.sarvam_api_key.clone(),
        config.upstream_timeout(),
    )?);
    tracing::info!(base_url = %config.sarvam_base_url, "Sarvam client initialized");

    // 2. Instantiate services
    let translation_service = Arc::new(TranslationService::new(sarvam_repo.clone()));
    let tts_service = Arc::new(TtsService::new(sarvam_repo));

    // 3. Instantiate controllers
    let translate_controller = Arc::new(TranslateController::new(translation_service));
    let tts_controller = Arc::new(TtsController::new(tts_service));

    let app = build_router(&config, translate_controller, tts_controller);

    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "sarvam_proxy=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "sarvam_proxy=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
