use anyhow::Result;
use axum::Router;
use sarvam_proxy::{
    controllers::{translate::TranslateController, tts::TtsController},
    domain::{translation::TranslationService, tts::TtsService},
    infrastructure::{
        config::{Config, Environment, LogFormat},
        http::build_router,
        repositories::SarvamRepository,
    },
};
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

pub mod stub_upstream;

use api_client::TestClient;
use stub_upstream::StubUpstream;

pub const TEST_API_KEY: &str = "test-sarvam-key";

pub struct TestContext {
    pub client: TestClient,
    pub upstream: StubUpstream,
    #[allow(dead_code)]
    pub config: Config,
}

impl TestContext {
    /// Start a stub upstream and the proxy, letting the test adjust the
    /// configuration before the app is built.
    pub async fn start_with(configure: impl FnOnce(&mut Config)) -> Self {
        let upstream = StubUpstream::start().await;

        let mut config = Config {
            host: "127.0.0.1".to_string(),
            port: 0, // Will be assigned by the OS
            environment: Environment::Development,
            log_format: LogFormat::Pretty,
            sarvam_api_key: TEST_API_KEY.to_string(),
            sarvam_base_url: upstream.base_url.clone(),
            upstream_timeout_secs: 5,
            static_dir: "dist".into(),
            frontend_dev_url: upstream.base_url.clone(),
        };
        configure(&mut config);

        let app = create_app(&config).expect("Failed to create app");

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to get local addr");
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = TestClient::new(&base_url);

        Self {
            client,
            upstream,
            config,
        }
    }
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async { Self::start_with(|_| {}).await }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Servers stop with the test runtime
        }
    }
}

/// Wire the app the same way `main` does
fn create_app(config: &Config) -> Result<Router> {
    let sarvam_repo = Arc::new(SarvamRepository::new(
        config.sarvam_base_url.clone(),
        config.sarvam_api_key.clone(),
        config.upstream_timeout(),
    )?);

    let translate_controller = Arc::new(TranslateController::new(Arc::new(
        TranslationService::new(sarvam_repo.clone()),
    )));
    let tts_controller = Arc::new(TtsController::new(Arc::new(TtsService::new(sarvam_repo))));

    Ok(build_router(config, translate_controller, tts_controller))
}

/// Base URL on which nothing is listening
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
