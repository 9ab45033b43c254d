use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::models::cache::CacheEntry;
use crate::models::error::Error;
use crate::utils::state::AppState;

const TEMPLATE_CACHE_TTL_SECONDS: i64 = 3600;

pub async fn get_templates(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, Error> {
    {
        let cached = state.template_cache.read().await;
        if let Some(entry) = cached.as_ref() {
            if !entry.is_expired() {
                return Ok(Json(json!({ "templates": entry.value })));
            }
        }
    }

    let templates = state.memes.popular_templates().await?;

    let mut cached = state.template_cache.write().await;
    *cached = Some(CacheEntry::new(
        templates.clone(),
        TEMPLATE_CACHE_TTL_SECONDS,
    ));

    Ok(Json(json!({ "templates": templates })))
}
