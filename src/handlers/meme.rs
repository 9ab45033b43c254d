use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;

use crate::models::error::Error;
use crate::utils::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemeRequest {
    pub top_text: String,
    pub bottom_text: String,
    pub template_id: Option<String>,
}

pub async fn create_meme(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MemeRequest>,
) -> Result<impl IntoResponse, Error> {
    let meme = state
        .memes
        .render(
            &request.top_text,
            &request.bottom_text,
            request.template_id.as_deref(),
        )
        .await?;

    Ok(Json(meme))
}
