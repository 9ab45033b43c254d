use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, warn};

use crate::models::generation::CaptionMode;
use crate::providers::ProviderError;
use crate::utils::text::sanitize_caption;

pub const HF_MODEL_URL: &str =
    "https://router.huggingface.co/hf-inference/models/mistralai/Mixtral-8x7B-Instruct-v0.1";

pub fn fallback_caption(mode: CaptionMode) -> &'static str {
    match mode {
        CaptionMode::News => "When you read the news and can't even...",
        CaptionMode::Custom => "That feeling when...",
    }
}

fn build_prompt(mode: CaptionMode, text: &str) -> String {
    match mode {
        CaptionMode::News => format!(
            "Create a funny, witty meme caption for this news headline. Keep it short \
             (max 100 characters), punchy, and internet-humor friendly. Headline: \"{text}\""
        ),
        CaptionMode::Custom => format!(
            "Create a hilarious meme caption based on this idea. Keep it short \
             (max 100 characters), punchy, and make it meme-worthy. Idea: \"{text}\""
        ),
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: GenerateParameters,
}

#[derive(Serialize)]
struct GenerateParameters {
    max_new_tokens: u32,
    temperature: f32,
    top_p: f32,
}

impl Default for GenerateParameters {
    fn default() -> Self {
        Self {
            max_new_tokens: 100,
            temperature: 0.9,
            top_p: 0.95,
        }
    }
}

/// Client for the hosted caption model.
#[derive(Clone)]
pub struct CaptionGenerator {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl CaptionGenerator {
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: HF_MODEL_URL.to_string(),
            api_key,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Asks the model for a caption. Errors on credentials, transport, or a
    /// non-2xx upstream status; an unexpected but well-formed response body
    /// degrades to the mode's stock caption instead.
    pub async fn generate(&self, text: &str, mode: CaptionMode) -> Result<String, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredentials("HUGGINGFACE_API_KEY"))?;

        let prompt = build_prompt(mode, text);
        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(api_key)
            .json(&GenerateRequest {
                inputs: &prompt,
                parameters: GenerateParameters::default(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, %body, "caption model returned an error");
            return Err(ProviderError::Upstream {
                status,
                message: format!("Caption model error: {status}"),
            });
        }

        let payload: Value = response.json().await?;
        let caption = payload
            .get(0)
            .and_then(|entry| entry.get("generated_text"))
            .and_then(Value::as_str)
            .map(|generated| sanitize_caption(generated, &prompt))
            .filter(|caption| !caption.is_empty())
            .unwrap_or_else(|| fallback_caption(mode).to_string());

        Ok(caption)
    }

    /// Never fails: any error degrades to the mode's stock caption. The bool
    /// reports the degradation.
    pub async fn generate_or_fallback(&self, text: &str, mode: CaptionMode) -> (String, bool) {
        match self.generate(text, mode).await {
            Ok(caption) => (caption, false),
            Err(error) => {
                warn!(%error, "caption generation failed, using stock caption");
                (fallback_caption(mode).to_string(), true)
            }
        }
    }
}
