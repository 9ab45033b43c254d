use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use http::StatusCode;
use serde::Deserialize;
use serde_json::json;

use crate::models::error::Error;
use crate::models::generation::CaptionMode;
use crate::utils::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CaptionRequest {
    pub text: String,
    #[serde(rename = "type", default)]
    pub mode: CaptionMode,
}

pub async fn generate_caption(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CaptionRequest>,
) -> Result<impl IntoResponse, Error> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(Error::new(StatusCode::BAD_REQUEST, "text is required"));
    }

    let caption = state.captions.generate(text, request.mode).await?;

    Ok(Json(json!({ "caption": caption })))
}
