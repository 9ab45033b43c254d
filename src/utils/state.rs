use reqwest::Client;
use tokio::sync::RwLock;

use crate::models::cache::CacheEntry;
use crate::models::template::RemoteTemplate;
use crate::providers::gnews::NewsFetcher;
use crate::providers::huggingface::CaptionGenerator;
use crate::providers::imgflip::MemeRenderer;
use crate::utils::config::Config;

pub struct AppState {
    pub config: Config,
    pub http_client: Client,
    pub news: NewsFetcher,
    pub captions: CaptionGenerator,
    pub memes: MemeRenderer,
    pub template_cache: RwLock<Option<CacheEntry<Vec<RemoteTemplate>>>>,
}

impl AppState {
    pub fn init() -> Self {
        Self::from_config(Config::init())
    }

    pub fn from_config(config: Config) -> Self {
        let http_client = Client::new();
        let news = NewsFetcher::new(http_client.clone(), config.gnews_api_key.clone());
        let captions = CaptionGenerator::new(http_client.clone(), config.hf_api_key.clone());
        let memes = MemeRenderer::new(
            http_client.clone(),
            config.imgflip_user.clone(),
            config.imgflip_pass.clone(),
        );

        Self {
            config,
            http_client,
            news,
            captions,
            memes,
            template_cache: RwLock::new(None),
        }
    }
}
