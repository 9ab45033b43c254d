//! The generation flow: fetch headlines, caption one, render the meme.
//! Calls are strictly sequential per attempt (the renderer needs the
//! caption), and every stage degrades to a fallback value instead of
//! failing, so the flow always reaches a usable end state.

use rand::seq::IndexedRandom;
use reqwest::Client;
use tokio::sync::Mutex;
use tracing::info;

use crate::models::article::{Article, NewsQuery};
use crate::models::generation::{CaptionMode, GenerationRequest, MemeResult, PageCursor};
use crate::models::template::{Template, CURATED};
use crate::providers::gnews::NewsFetcher;
use crate::providers::huggingface::CaptionGenerator;
use crate::providers::imgflip::MemeRenderer;
use crate::utils::config::Config;
use crate::utils::text::split_caption;

const NEWS_WARNING: &str = "Couldn't reach the news service, showing sample headlines instead.";
const CAPTION_WARNING: &str = "Caption service unavailable, used a stock caption.";
const MEME_WARNING: &str = "Meme service unavailable, used the fallback renderer.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    LoadingNews,
    NewsLoaded,
    Generating,
    MemeReady,
}

/// All state owned by one view of the flow. Snapshots of this are what a UI
/// renders from.
#[derive(Debug, Clone)]
pub struct FlowState {
    pub phase: Phase,
    pub query: NewsQuery,
    pub articles: Vec<Article>,
    pub cursor: PageCursor,
    pub selection: Option<GenerationRequest>,
    pub meme: Option<MemeResult>,
    pub warning: Option<String>,
    pub loading_more: bool,
    // Bumped on every refresh/filter change; in-flight fetches carry the
    // value they started with and drop their result if it no longer matches.
    generation: u64,
}

impl Default for FlowState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            query: NewsQuery::default(),
            articles: Vec::new(),
            cursor: PageCursor::first(),
            selection: None,
            meme: None,
            warning: None,
            loading_more: false,
            generation: 0,
        }
    }
}

pub struct Orchestrator {
    news: NewsFetcher,
    captions: CaptionGenerator,
    memes: MemeRenderer,
    state: Mutex<FlowState>,
}

impl Orchestrator {
    pub fn new(client: Client, config: &Config) -> Self {
        Self::with_providers(
            NewsFetcher::new(client.clone(), config.gnews_api_key.clone()),
            CaptionGenerator::new(client.clone(), config.hf_api_key.clone()),
            MemeRenderer::new(
                client,
                config.imgflip_user.clone(),
                config.imgflip_pass.clone(),
            ),
        )
    }

    pub fn with_providers(
        news: NewsFetcher,
        captions: CaptionGenerator,
        memes: MemeRenderer,
    ) -> Self {
        Self {
            news,
            captions,
            memes,
            state: Mutex::new(FlowState::default()),
        }
    }

    pub async fn snapshot(&self) -> FlowState {
        self.state.lock().await.clone()
    }

    /// Replaces the filters and reloads from the first page.
    pub async fn set_filters(&self, query: NewsQuery) {
        {
            let mut state = self.state.lock().await;
            state.query = query;
        }
        self.refresh().await;
    }

    /// Clears the current headlines and fetches page one. A refresh that
    /// finishes after a newer one started is discarded.
    pub async fn refresh(&self) {
        let (query, generation) = {
            let mut state = self.state.lock().await;
            state.generation += 1;
            state.phase = Phase::LoadingNews;
            state.articles.clear();
            state.cursor = PageCursor::first();
            state.warning = None;
            let mut query = state.query.clone();
            query.page = 1;
            (query, state.generation)
        };

        let (batch, degraded) = self.news.top_headlines_or_fallback(&query).await;

        let mut state = self.state.lock().await;
        if state.generation != generation {
            return;
        }
        state.cursor.has_more = batch.has_more(query.page_size);
        state.articles = batch.articles;
        if degraded {
            state.warning = Some(NEWS_WARNING.to_string());
        }
        state.phase = Phase::NewsLoaded;
        info!(
            count = state.articles.len(),
            has_more = state.cursor.has_more,
            "headlines refreshed"
        );
    }

    /// Fetches the next page and appends it. A no-op while another page is
    /// already loading, once the cursor is exhausted, or outside the loaded
    /// state. Returns whether a fetch was actually issued and applied.
    pub async fn load_more(&self) -> bool {
        let (query, generation) = {
            let mut state = self.state.lock().await;
            if state.phase != Phase::NewsLoaded || state.loading_more || !state.cursor.has_more {
                return false;
            }
            state.loading_more = true;
            state.cursor.page += 1;
            let mut query = state.query.clone();
            query.page = state.cursor.page;
            (query, state.generation)
        };

        let (batch, degraded) = self.news.top_headlines_or_fallback(&query).await;

        let mut state = self.state.lock().await;
        state.loading_more = false;
        if state.generation != generation {
            return false;
        }
        state.cursor.has_more = batch.has_more(query.page_size);
        state.articles.extend(batch.articles);
        if degraded {
            state.warning = Some(NEWS_WARNING.to_string());
        }
        true
    }

    /// Starts a generation attempt from a loaded headline.
    pub async fn generate_from_article(&self, index: usize) -> bool {
        let text = {
            let state = self.state.lock().await;
            if state.phase != Phase::NewsLoaded {
                return false;
            }
            match state.articles.get(index) {
                Some(article) => article.title.clone(),
                None => return false,
            }
        };
        self.run_generation(text, CaptionMode::News).await
    }

    /// Starts a generation attempt from free text.
    pub async fn generate_custom(&self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text.trim().is_empty() {
            return false;
        }
        self.run_generation(text, CaptionMode::Custom).await
    }

    /// Re-renders the current caption on a different, randomly chosen
    /// template.
    pub async fn another_template(&self) -> bool {
        let (request, generation) = {
            let mut state = self.state.lock().await;
            if state.phase != Phase::MemeReady {
                return false;
            }
            let request = match state.selection.clone() {
                Some(request) => request,
                None => return false,
            };
            state.phase = Phase::Generating;
            (request, state.generation)
        };

        let template = pick_template(Some(request.template.id));
        let (top, bottom) = split_caption(&request.caption, &template);
        let (meme, degraded) = self
            .memes
            .render_or_fallback(&top, &bottom, Some(template.id))
            .await;

        let mut state = self.state.lock().await;
        if state.generation != generation {
            return false;
        }
        state.selection = Some(GenerationRequest {
            template,
            top_text: top,
            bottom_text: bottom,
            ..request
        });
        state.meme = Some(meme);
        state.warning = degraded.then(|| MEME_WARNING.to_string());
        state.phase = Phase::MemeReady;
        true
    }

    /// Drops the current meme and returns to the headline list.
    pub async fn choose_another(&self) {
        let mut state = self.state.lock().await;
        if state.phase != Phase::MemeReady {
            return;
        }
        state.selection = None;
        state.meme = None;
        state.warning = None;
        state.phase = Phase::NewsLoaded;
    }

    async fn run_generation(&self, text: String, mode: CaptionMode) -> bool {
        let generation = {
            let mut state = self.state.lock().await;
            if state.phase == Phase::Generating {
                return false;
            }
            state.phase = Phase::Generating;
            state.warning = None;
            state.generation
        };

        // Caption first, render second: the renderer needs the caption.
        let (caption, caption_degraded) = self.captions.generate_or_fallback(&text, mode).await;
        let template = pick_template(None);
        let (top, bottom) = split_caption(&caption, &template);
        let (meme, meme_degraded) = self
            .memes
            .render_or_fallback(&top, &bottom, Some(template.id))
            .await;

        let mut state = self.state.lock().await;
        if state.generation != generation {
            return false;
        }
        state.selection = Some(GenerationRequest {
            source_text: text,
            mode,
            template,
            caption,
            top_text: top,
            bottom_text: bottom,
        });
        state.meme = Some(meme);
        state.warning = if caption_degraded {
            Some(CAPTION_WARNING.to_string())
        } else if meme_degraded {
            Some(MEME_WARNING.to_string())
        } else {
            None
        };
        state.phase = Phase::MemeReady;
        true
    }
}

fn pick_template(exclude: Option<&str>) -> Template {
    let mut rng = rand::rng();
    loop {
        let template = *CURATED.choose(&mut rng).unwrap_or(&CURATED[0]);
        if CURATED.len() == 1 || exclude != Some(template.id) {
            return template;
        }
    }
}
