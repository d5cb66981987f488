use serde_json::Value;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub fn generate_path(model: &str) -> String {
    format!("/models/{model}:generateContent")
}

/// Mounts one single-use mock per entry so the n-th call gets the n-th response.
pub async fn mount_generate_sequence(
    mock_server: &MockServer,
    model: &str,
    responses: Vec<(u16, Value)>,
) {
    for (status, body) in responses {
        Mock::given(method("POST"))
            .and(path(generate_path(model)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .up_to_n_times(1)
            .mount(mock_server)
            .await;
    }
}

pub async fn mount_generate_always(mock_server: &MockServer, model: &str, status: u16, body: Value) {
    Mock::given(method("POST"))
        .and(path(generate_path(model)))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(mock_server)
        .await;
}

pub async fn mount_model_list(mock_server: &MockServer, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(mock_server)
        .await;
}

pub async fn setup_generate_sequence_mock(model: &str, responses: Vec<(u16, Value)>) -> MockServer {
    let mock_server = MockServer::start().await;
    mount_generate_sequence(&mock_server, model, responses).await;
    mock_server
}

pub async fn generate_request_bodies(mock_server: &MockServer) -> Vec<Value> {
    mock_server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.url.path().ends_with(":generateContent"))
        .map(|request| serde_json::from_slice(&request.body).unwrap())
        .collect()
}
