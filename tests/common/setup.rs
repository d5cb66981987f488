use std::sync::Arc;

use reqwest::Client;

use code_explainer::config::{Config, FailurePolicy, SequenceConfig};
use code_explainer::llm_client::GeminiClient;
use code_explainer::service::ExplanationService;

pub const TEST_MODEL: &str = "test-model";
pub const TEST_API_KEY: &str = "test-key";

pub fn create_test_config(api_url: String) -> Config {
    Config {
        api_url,
        api_key: TEST_API_KEY.to_string(),
        ..Config::default()
    }
}

pub fn create_service(config: &Config) -> Arc<ExplanationService> {
    let client = Arc::new(GeminiClient::new(
        Client::new(),
        &config.api_url,
        &config.api_key,
    ));
    Arc::new(ExplanationService::new(client, config.sequence))
}

pub fn create_service_with_policy(api_url: String, policy: FailurePolicy) -> ExplanationService {
    let client = Arc::new(GeminiClient::new(Client::new(), &api_url, TEST_API_KEY));
    ExplanationService::new(
        client,
        SequenceConfig {
            failure_policy: policy,
            ..SequenceConfig::default()
        },
    )
}

pub async fn create_test_app_components(
    api_url: String,
) -> (Arc<Config>, Arc<ExplanationService>) {
    let config = create_test_config(api_url);
    let service = create_service(&config);
    (Arc::new(config), service)
}
