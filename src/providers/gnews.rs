use reqwest::Client;
use serde::Deserialize;
use tracing::{error, warn};

use crate::models::article::{Article, NewsBatch, NewsQuery, RawArticle};
use crate::providers::ProviderError;

pub const GNEWS_URL: &str = "https://gnews.io/api/v4/top-headlines";

/// Client for the headlines provider. Stateless; one instance lives in the
/// app state and is shared across requests.
#[derive(Clone)]
pub struct NewsFetcher {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GnewsResponse {
    #[serde(default, alias = "totalArticles", alias = "totalResults")]
    total: u64,
    #[serde(default)]
    articles: Option<Vec<RawArticle>>,
}

impl NewsFetcher {
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: GNEWS_URL.to_string(),
            api_key,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetches one page of headlines. Empty and "all" filters are omitted
    /// from the upstream request.
    pub async fn top_headlines(&self, query: &NewsQuery) -> Result<NewsBatch, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredentials("GNEWS_API_KEY"))?;

        let mut params: Vec<(&str, String)> = vec![
            ("apikey", api_key.to_string()),
            ("lang", "en".to_string()),
            ("max", query.page_size.to_string()),
            ("page", query.page.to_string()),
        ];
        if let Some(q) = query.q.as_deref() {
            if !q.trim().is_empty() {
                params.push(("q", q.to_string()));
            }
        }
        if !query.category.is_empty() && query.category != "all" {
            params.push(("category", query.category.to_lowercase()));
        }
        if !query.country.is_empty() {
            params.push(("country", query.country.to_lowercase()));
        }

        let response = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, %body, "headlines provider returned an error");
            return Err(ProviderError::Upstream {
                status,
                message: "Failed to fetch news".to_string(),
            });
        }

        let payload: GnewsResponse = response.json().await?;
        let raw = payload
            .articles
            .ok_or_else(|| ProviderError::Shape("missing articles array".to_string()))?;

        Ok(NewsBatch {
            articles: raw.into_iter().map(Article::from_raw).collect(),
            total_results: payload.total,
        })
    }

    /// Like [`top_headlines`](Self::top_headlines) but never fails: any error
    /// degrades to the fixed sample pair. The bool reports the degradation.
    pub async fn top_headlines_or_fallback(&self, query: &NewsQuery) -> (NewsBatch, bool) {
        match self.top_headlines(query).await {
            Ok(batch) => (batch, false),
            Err(error) => {
                warn!(%error, "headlines fetch failed, substituting sample articles");
                let articles = Article::sample_pair();
                let total_results = articles.len() as u64;
                (
                    NewsBatch {
                        articles,
                        total_results,
                    },
                    true,
                )
            }
        }
    }
}
