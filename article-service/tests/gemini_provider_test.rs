use article_service::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use article_service::services::providers::{
    FinishReason, GenerationParams, ProviderError, TextProvider,
};
use secrecy::Secret;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

fn provider_for(server: &MockServer) -> GeminiTextProvider {
    GeminiTextProvider::new(GeminiConfig {
        api_key: Secret::new("test-key".to_string()),
        model: "gemini-2.0-flash".to_string(),
        api_base: format!("{}/v1beta", server.uri()),
    })
    .unwrap()
}

fn text_response(parts: &[&str]) -> Value {
    let parts: Vec<Value> = parts.iter().map(|t| json!({ "text": t })).collect();
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": parts },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 4, "candidatesTokenCount": 9, "totalTokenCount": 13 }
    })
}

#[tokio::test]
async fn sends_prompt_and_generation_config() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response(&["A joke."])))
        .expect(1)
        .mount(&server)
        .await;

    let response = provider_for(&server)
        .generate("tell me a joke about ai", &GenerationParams::DEFAULT)
        .await
        .unwrap();

    assert_eq!(response.text, "A joke.");
    assert_eq!(response.input_tokens, 4);
    assert_eq!(response.output_tokens, 9);
    assert_eq!(response.finish_reason, FinishReason::Complete);

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["contents"][0]["role"], "user");
    assert_eq!(
        body["contents"][0]["parts"][0]["text"],
        "tell me a joke about ai"
    );
    let config = &body["generationConfig"];
    assert!((config["temperature"].as_f64().unwrap() - 0.9).abs() < 1e-6);
    assert_eq!(config["topP"], 1.0);
    assert_eq!(config["topK"], 1);
    assert_eq!(config["maxOutputTokens"], 2048);
}

#[tokio::test]
async fn api_key_never_appears_in_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response(&["ok"])))
        .mount(&server)
        .await;

    provider_for(&server)
        .generate("p", &GenerationParams::DEFAULT)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].url.as_str().contains("test-key"));
}

#[tokio::test]
async fn concatenates_multiple_parts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(text_response(&["Intro. ", "Body. ", "End."])),
        )
        .mount(&server)
        .await;

    let response = provider_for(&server)
        .generate("p", &GenerationParams::ARTICLE)
        .await
        .unwrap();

    assert_eq!(response.text, "Intro. Body. End.");
}

#[tokio::test]
async fn maps_rate_limit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .generate("p", &GenerationParams::DEFAULT)
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::RateLimited));
}

#[tokio::test]
async fn maps_api_error_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .generate("p", &GenerationParams::DEFAULT)
        .await
        .unwrap_err();

    match err {
        ProviderError::ApiError(message) => {
            assert!(message.contains("400"));
            assert!(message.contains("API key not valid"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_an_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .generate("p", &GenerationParams::DEFAULT)
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::ApiError(_)));
}

#[tokio::test]
async fn blocked_prompt_is_filtered() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .generate("p", &GenerationParams::DEFAULT)
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::ContentFiltered(_)));
}

#[tokio::test]
async fn unreachable_provider_is_a_network_error() {
    let provider = GeminiTextProvider::new(GeminiConfig {
        api_key: Secret::new("test-key".to_string()),
        model: "gemini-2.0-flash".to_string(),
        api_base: "http://127.0.0.1:9/v1beta".to_string(),
    })
    .unwrap();

    let err = provider
        .generate("p", &GenerationParams::DEFAULT)
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::NetworkError(_)));
}

#[tokio::test]
async fn health_check_lists_models() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "models": [] })))
        .expect(1)
        .mount(&server)
        .await;

    provider_for(&server).health_check().await.unwrap();
}
