use serde::{Deserialize, Serialize};

use crate::models::template::Template;

/// Which prompt family the caption model is asked to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptionMode {
    News,
    #[default]
    Custom,
}

/// Everything belonging to one generation attempt. Built when the user picks
/// a headline or submits an idea, discarded when they move on.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub source_text: String,
    pub mode: CaptionMode,
    pub template: Template,
    pub caption: String,
    pub top_text: String,
    pub bottom_text: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MemeResult {
    pub meme_url: String,
    pub page_url: Option<String>,
}

/// Pagination state for the headlines list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub page: u32,
    pub has_more: bool,
}

impl PageCursor {
    pub fn first() -> Self {
        Self {
            page: 1,
            has_more: false,
        }
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::first()
    }
}
