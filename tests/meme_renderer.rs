use reqwest::Client;
use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use memeline::providers::imgflip::MemeRenderer;

fn renderer_for(server: &MockServer) -> MemeRenderer {
    MemeRenderer::new(
        Client::new(),
        Some("user".to_string()),
        Some("pass".to_string()),
    )
    .with_caption_url(format!("{}/caption_image", server.uri()))
    .with_memes_url(format!("{}/get_memes", server.uri()))
}

#[tokio::test]
async fn renders_through_primary_provider() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/caption_image"))
        .and(body_string_contains("template_id=181913649"))
        .and(body_string_contains("username=user"))
        .and(body_string_contains("text0=top+half"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "url": "https://i.imgflip.com/abc.jpg", "page_url": "https://imgflip.com/i/abc" }
        })))
        .mount(&server)
        .await;

    let meme = renderer_for(&server)
        .render("top half", "bottom half", None)
        .await
        .unwrap();

    assert_eq!(meme.meme_url, "https://i.imgflip.com/abc.jpg");
    assert_eq!(meme.page_url.as_deref(), Some("https://imgflip.com/i/abc"));
}

#[tokio::test]
async fn rejection_degrades_to_encoded_fallback_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/caption_image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error_message": "Invalid template"
        })))
        .mount(&server)
        .await;

    let (meme, degraded) = renderer_for(&server)
        .render_or_fallback("hello world", "it's fine", Some("181913649"))
        .await;

    assert!(degraded);
    assert_eq!(
        meme.meme_url,
        "https://api.memegen.link/images/drake/hello%20world/it%27s%20fine.png"
    );
    assert!(meme.page_url.is_none());
}

#[tokio::test]
async fn server_error_degrades_to_fallback_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/caption_image"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (meme, degraded) = renderer_for(&server)
        .render_or_fallback("top", "", None)
        .await;

    assert!(degraded);
    assert_eq!(meme.meme_url, "https://api.memegen.link/images/drake/top/_.png");
}

#[tokio::test]
async fn missing_credentials_degrade_to_fallback_url() {
    let renderer = MemeRenderer::new(Client::new(), None, None);

    let (meme, degraded) = renderer.render_or_fallback("a", "b", None).await;

    assert!(degraded);
    assert!(meme.meme_url.starts_with("https://api.memegen.link/images/"));
}

#[tokio::test]
async fn template_catalog_is_capped_at_twenty() {
    let server = MockServer::start().await;
    let memes: Vec<Value> = (0..25)
        .map(|i| {
            json!({
                "id": format!("{i}"),
                "name": format!("Template {i}"),
                "url": format!("https://i.imgflip.com/{i}.jpg"),
                "width": 500,
                "height": 500,
                "box_count": 2
            })
        })
        .collect();
    Mock::given(method("GET"))
        .and(path("/get_memes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "memes": memes }
        })))
        .mount(&server)
        .await;

    let templates = renderer_for(&server).popular_templates().await.unwrap();

    assert_eq!(templates.len(), 20);
    assert_eq!(templates[0].name, "Template 0");
    assert_eq!(templates[0].box_count, 2);
}
