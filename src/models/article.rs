use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub url: String,
}

/// A normalized headline. Every field is guaranteed non-empty after
/// normalization; missing upstream values are replaced with placeholders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub description: String,
    pub source: Source,
    pub url: String,
    pub url_to_image: String,
    pub published_at: String,
}

impl Article {
    pub const DEFAULT_TITLE: &'static str = "No title available";
    pub const DEFAULT_DESCRIPTION: &'static str = "No description available";
    pub const DEFAULT_SOURCE: &'static str = "Unknown source";
    pub const PLACEHOLDER_IMAGE: &'static str =
        "https://via.placeholder.com/300x150?text=No+Image";

    pub fn from_raw(raw: RawArticle) -> Self {
        let source = match raw.source {
            Some(RawSource::Detailed { name, url }) => Source {
                name: non_empty(name).unwrap_or_else(|| Self::DEFAULT_SOURCE.to_string()),
                url: non_empty(url).unwrap_or_else(|| "#".to_string()),
            },
            Some(RawSource::Name(name)) => Source {
                name: if name.trim().is_empty() {
                    Self::DEFAULT_SOURCE.to_string()
                } else {
                    name
                },
                url: "#".to_string(),
            },
            None => Source {
                name: Self::DEFAULT_SOURCE.to_string(),
                url: "#".to_string(),
            },
        };

        Self {
            title: non_empty(raw.title).unwrap_or_else(|| Self::DEFAULT_TITLE.to_string()),
            description: non_empty(raw.description)
                .unwrap_or_else(|| Self::DEFAULT_DESCRIPTION.to_string()),
            source,
            url: non_empty(raw.url).unwrap_or_else(|| "#".to_string()),
            url_to_image: non_empty(raw.image)
                .unwrap_or_else(|| Self::PLACEHOLDER_IMAGE.to_string()),
            published_at: non_empty(raw.published_at).unwrap_or_else(|| Utc::now().to_rfc3339()),
        }
    }

    /// The fixed pair of articles shown when the headlines provider is down.
    pub fn sample_pair() -> Vec<Article> {
        vec![
            Article {
                title: "Breaking: news service taking a coffee break".to_string(),
                description: "We couldn't reach the headlines provider. Here is a placeholder \
                              story while it recovers."
                    .to_string(),
                source: Source {
                    name: "Memeline".to_string(),
                    url: "#".to_string(),
                },
                url: "#".to_string(),
                url_to_image: Self::PLACEHOLDER_IMAGE.to_string(),
                published_at: Utc::now().to_rfc3339(),
            },
            Article {
                title: "Meanwhile: meme generation still works".to_string(),
                description: "Pick this card or type your own idea to keep making memes."
                    .to_string(),
                source: Source {
                    name: "Memeline".to_string(),
                    url: "#".to_string(),
                },
                url: "#".to_string(),
                url_to_image: Self::PLACEHOLDER_IMAGE.to_string(),
                published_at: Utc::now().to_rfc3339(),
            },
        ]
    }
}

/// Wire shape of a headline as the providers actually send it. `source`
/// arrives either as an object or as a bare string depending on the provider.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source: Option<RawSource>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, alias = "urlToImage")]
    pub image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawSource {
    Detailed {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        url: Option<String>,
    },
    Name(String),
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// One page of normalized headlines.
#[derive(Debug, Clone)]
pub struct NewsBatch {
    pub articles: Vec<Article>,
    pub total_results: u64,
}

impl NewsBatch {
    /// A full page suggests there is at least one more. Heuristic, the
    /// provider exposes no authoritative cursor.
    pub fn has_more(&self, page_size: u32) -> bool {
        self.articles.len() as u32 == page_size
    }
}

/// Filters for a headlines fetch, also usable directly as query parameters.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NewsQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size", rename = "pageSize")]
    pub page_size: u32,
}

impl Default for NewsQuery {
    fn default() -> Self {
        Self {
            q: None,
            category: default_category(),
            country: default_country(),
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

fn default_category() -> String {
    "general".to_string()
}

fn default_country() -> String {
    "us".to_string()
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    6
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_get_documented_defaults() {
        let raw: RawArticle = serde_json::from_value(json!({})).unwrap();
        let article = Article::from_raw(raw);

        assert_eq!(article.title, Article::DEFAULT_TITLE);
        assert_eq!(article.description, Article::DEFAULT_DESCRIPTION);
        assert_eq!(article.source.name, Article::DEFAULT_SOURCE);
        assert_eq!(article.source.url, "#");
        assert_eq!(article.url, "#");
        assert_eq!(article.url_to_image, Article::PLACEHOLDER_IMAGE);
        assert!(!article.published_at.is_empty());
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let raw: RawArticle =
            serde_json::from_value(json!({ "title": "", "description": "  " })).unwrap();
        let article = Article::from_raw(raw);

        assert_eq!(article.title, Article::DEFAULT_TITLE);
        assert_eq!(article.description, Article::DEFAULT_DESCRIPTION);
    }

    #[test]
    fn source_accepts_object_or_bare_string() {
        let raw: RawArticle =
            serde_json::from_value(json!({ "source": { "name": "BBC", "url": "https://bbc.co.uk" } }))
                .unwrap();
        assert_eq!(Article::from_raw(raw).source.name, "BBC");

        let raw: RawArticle = serde_json::from_value(json!({ "source": "AP" })).unwrap();
        let article = Article::from_raw(raw);
        assert_eq!(article.source.name, "AP");
        assert_eq!(article.source.url, "#");
    }

    #[test]
    fn full_page_means_more_available() {
        let batch = NewsBatch {
            articles: Article::sample_pair(),
            total_results: 2,
        };
        assert!(batch.has_more(2));
        assert!(!batch.has_more(6));
    }

    #[test]
    fn sample_pair_is_two_fixed_articles() {
        let pair = Article::sample_pair();
        assert_eq!(pair.len(), 2);
        assert_eq!(pair[0].source.name, "Memeline");
        assert_eq!(pair[1].source.name, "Memeline");
    }
}
