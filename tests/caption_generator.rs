use reqwest::Client;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use memeline::models::generation::CaptionMode;
use memeline::providers::huggingface::{fallback_caption, CaptionGenerator};

fn generator_for(server: &MockServer) -> CaptionGenerator {
    CaptionGenerator::new(Client::new(), Some("test-key".to_string()))
        .with_base_url(format!("{}/generate", server.uri()))
}

#[tokio::test]
async fn sends_prompt_parameters_and_sanitizes_output() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "parameters": { "max_new_tokens": 100, "temperature": 0.9, "top_p": 0.95 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "generated_text": "\n\"When the WiFi dies, so do I\"" }
        ])))
        .mount(&server)
        .await;

    let caption = generator_for(&server)
        .generate("my idea", CaptionMode::Custom)
        .await
        .unwrap();

    assert_eq!(caption, "When the WiFi dies, so do I");
}

#[tokio::test]
async fn output_is_capped_at_hundred_chars() {
    let server = MockServer::start().await;
    let long = "z".repeat(220);
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{ "generated_text": long }])),
        )
        .mount(&server)
        .await;

    let caption = generator_for(&server)
        .generate("idea", CaptionMode::Custom)
        .await
        .unwrap();

    assert_eq!(caption.chars().count(), 100);
    assert!(caption.ends_with('…'));
}

#[tokio::test]
async fn unreachable_model_degrades_to_news_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let (caption, degraded) = generator_for(&server)
        .generate_or_fallback("Some headline", CaptionMode::News)
        .await;

    assert!(degraded);
    assert_eq!(caption, "When you read the news and can't even...");
}

#[tokio::test]
async fn unexpected_shape_degrades_to_mode_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "foo": "bar" })))
        .mount(&server)
        .await;

    let caption = generator_for(&server)
        .generate("idea", CaptionMode::Custom)
        .await
        .unwrap();

    assert_eq!(caption, fallback_caption(CaptionMode::Custom));
    assert_eq!(caption, "That feeling when...");
}

#[tokio::test]
async fn missing_key_still_yields_a_usable_caption() {
    let generator = CaptionGenerator::new(Client::new(), None);

    assert!(generator.generate("idea", CaptionMode::News).await.is_err());

    let (caption, degraded) = generator
        .generate_or_fallback("idea", CaptionMode::News)
        .await;
    assert!(degraded);
    assert_eq!(caption, fallback_caption(CaptionMode::News));
}
