use reqwest::Client;
use serde::Deserialize;
use tracing::{error, warn};

use crate::models::generation::MemeResult;
use crate::models::template::{RemoteTemplate, DEFAULT_TEMPLATE_ID};
use crate::providers::{memegen, ProviderError};

pub const CAPTION_URL: &str = "https://api.imgflip.com/caption_image";
pub const MEMES_URL: &str = "https://api.imgflip.com/get_memes";

const TEMPLATE_CATALOG_LIMIT: usize = 20;

/// Client for the image-captioning provider, with the credential-free
/// service as its fallback path.
#[derive(Clone)]
pub struct MemeRenderer {
    client: Client,
    caption_url: String,
    memes_url: String,
    memegen_base: String,
    username: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CaptionResponse {
    success: bool,
    #[serde(default)]
    data: Option<CaptionData>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CaptionData {
    url: String,
    #[serde(default)]
    page_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GetMemesResponse {
    success: bool,
    #[serde(default)]
    data: Option<MemeList>,
}

#[derive(Debug, Deserialize)]
struct MemeList {
    memes: Vec<RawMeme>,
}

#[derive(Debug, Deserialize)]
struct RawMeme {
    id: String,
    name: String,
    url: String,
    width: u32,
    height: u32,
    box_count: u32,
}

impl MemeRenderer {
    pub fn new(client: Client, username: Option<String>, password: Option<String>) -> Self {
        Self {
            client,
            caption_url: CAPTION_URL.to_string(),
            memes_url: MEMES_URL.to_string(),
            memegen_base: memegen::MEMEGEN_BASE.to_string(),
            username,
            password,
        }
    }

    pub fn with_caption_url(mut self, url: impl Into<String>) -> Self {
        self.caption_url = url.into();
        self
    }

    pub fn with_memes_url(mut self, url: impl Into<String>) -> Self {
        self.memes_url = url.into();
        self
    }

    pub fn with_memegen_base(mut self, base: impl Into<String>) -> Self {
        self.memegen_base = base.into();
        self
    }

    /// Renders through the primary provider. Success requires both a 2xx
    /// status and a `success` flag in the body.
    pub async fn render(
        &self,
        top: &str,
        bottom: &str,
        template_id: Option<&str>,
    ) -> Result<MemeResult, ProviderError> {
        let (username, password) = match (self.username.as_deref(), self.password.as_deref()) {
            (Some(username), Some(password)) => (username, password),
            _ => return Err(ProviderError::MissingCredentials("Imgflip credentials")),
        };

        let template = template_id.unwrap_or(DEFAULT_TEMPLATE_ID);
        let form = [
            ("template_id", template),
            ("username", username),
            ("password", password),
            ("text0", top),
            ("text1", bottom),
        ];

        let response = self
            .client
            .post(&self.caption_url)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, %body, "meme provider returned an error");
            return Err(ProviderError::Upstream {
                status,
                message: format!("Meme provider error: {status}"),
            });
        }

        let payload: CaptionResponse = response.json().await?;
        if !payload.success {
            return Err(ProviderError::Rejected(
                payload
                    .error_message
                    .unwrap_or_else(|| "Failed to create meme".to_string()),
            ));
        }

        let data = payload
            .data
            .ok_or_else(|| ProviderError::Shape("missing data in caption response".to_string()))?;

        Ok(MemeResult {
            meme_url: data.url,
            page_url: data.page_url,
        })
    }

    /// Never fails: when the primary provider is unavailable the text is
    /// baked into a fallback-service URL instead. The bool reports the
    /// degradation.
    pub async fn render_or_fallback(
        &self,
        top: &str,
        bottom: &str,
        template_id: Option<&str>,
    ) -> (MemeResult, bool) {
        match self.render(top, bottom, template_id).await {
            Ok(meme) => (meme, false),
            Err(error) => {
                warn!(%error, "primary meme render failed, using fallback service");
                (
                    MemeResult {
                        meme_url: memegen::fallback_url(&self.memegen_base, top, bottom),
                        page_url: None,
                    },
                    true,
                )
            }
        }
    }

    /// Fetches the provider's popular-template catalog, capped at 20 entries.
    pub async fn popular_templates(&self) -> Result<Vec<RemoteTemplate>, ProviderError> {
        let response = self.client.get(&self.memes_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, %body, "template catalog fetch failed");
            return Err(ProviderError::Upstream {
                status,
                message: "Failed to fetch meme templates".to_string(),
            });
        }

        let payload: GetMemesResponse = response.json().await?;
        if !payload.success {
            return Err(ProviderError::Rejected(
                "Failed to fetch meme templates".to_string(),
            ));
        }

        let memes = payload
            .data
            .ok_or_else(|| ProviderError::Shape("missing data in memes response".to_string()))?
            .memes;

        Ok(memes
            .into_iter()
            .take(TEMPLATE_CATALOG_LIMIT)
            .map(|meme| RemoteTemplate {
                id: meme.id,
                name: meme.name,
                url: meme.url,
                width: meme.width,
                height: meme.height,
                box_count: meme.box_count,
            })
            .collect())
    }
}
