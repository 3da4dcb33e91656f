#![allow(dead_code)]

use chat_service::config::{ChatConfig, GeminiSettings, InstitutionProfile};
use chat_service::services::providers::mock::MockTextProvider;
use chat_service::startup::{build_router, AppState, Application};
use axum::Router;
use secrecy::Secret;
use std::sync::Arc;
use std::time::Duration;

pub const COURSES_ANSWER: &str =
    "RCPIT offers B.Tech, M.Tech, and Ph.D. programs in various streams.";
pub const REFUSAL: &str = "I can only answer RCPIT-related queries.";

/// Configuration for tests: random port, dummy credential.
pub fn test_config() -> ChatConfig {
    let mut common = service_core::config::Config::default();
    common.host = "127.0.0.1".parse().expect("valid loopback address");
    common.port = 0;

    ChatConfig {
        common,
        gemini: GeminiSettings {
            api_key: Secret::new("test-api-key".to_string()),
            model: "gemini-2.0-flash".to_string(),
            timeout: Duration::from_secs(5),
        },
        institution: InstitutionProfile::default(),
        otlp_endpoint: None,
    }
}

/// Router wired to the given mock, for `oneshot` tests.
pub fn router_with(provider: Arc<MockTextProvider>) -> Router {
    build_router(AppState::new(&test_config(), provider))
}

pub struct TestApp {
    pub address: String,
    pub provider: Arc<MockTextProvider>,
}

impl TestApp {
    pub async fn spawn(provider: MockTextProvider) -> Self {
        let provider = Arc::new(provider);
        let app = Application::build_with_provider(test_config(), provider.clone())
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.http_port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp { address, provider }
    }
}
