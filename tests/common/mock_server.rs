use serde_json::Value;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub fn model_path(model: &str) -> String {
    format!("/v1beta/models/{model}:generateContent")
}

pub async fn mount_model_response(
    mock_server: &MockServer,
    model: &str,
    status: u16,
    body: impl Into<Value>,
    expected_calls: u64,
) {
    Mock::given(method("POST"))
        .and(path(model_path(model)))
        .respond_with(ResponseTemplate::new(status).set_body_json(body.into()))
        .expect(expected_calls)
        .mount(mock_server)
        .await;
}

/// Provider that must never be called.
pub async fn setup_untouched_provider() -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;

    mock_server
}

/// Every model answers with the same status and body, once each.
pub async fn setup_uniform_provider(
    models: &[&str],
    status: u16,
    body: impl Into<Value>,
) -> MockServer {
    let mock_server = MockServer::start().await;
    let body = body.into();

    for model in models {
        mount_model_response(&mock_server, model, status, body.clone(), 1).await;
    }

    mock_server
}

pub async fn requested_paths(mock_server: &MockServer) -> Vec<String> {
    mock_server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| request.url.path().to_string())
        .collect()
}
