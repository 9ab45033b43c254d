use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use http::StatusCode;
use serde_json::json;

use crate::models::article::NewsQuery;
use crate::models::error::Error;
use crate::utils::state::AppState;

pub async fn get_news(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NewsQuery>,
) -> Result<impl IntoResponse, Error> {
    let batch = state.news.top_headlines(&query).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "articles": batch.articles,
            "totalResults": batch.total_results,
        })),
    ))
}
