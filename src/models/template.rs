use serde::{Deserialize, Serialize};

/// A curated meme layout. The flags say which text regions the layout has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub top_text: bool,
    pub bottom_text: bool,
}

/// Hand-picked Imgflip layouts. The first entry is the default when no
/// template is supplied.
pub const CURATED: &[Template] = &[
    Template {
        id: "181913649",
        name: "Drake Hotline Bling",
        top_text: true,
        bottom_text: true,
    },
    Template {
        id: "87743020",
        name: "Two Buttons",
        top_text: true,
        bottom_text: true,
    },
    Template {
        id: "112126428",
        name: "Distracted Boyfriend",
        top_text: true,
        bottom_text: true,
    },
    Template {
        id: "129242436",
        name: "Change My Mind",
        top_text: true,
        bottom_text: false,
    },
    Template {
        id: "155067746",
        name: "Surprised Pikachu",
        top_text: true,
        bottom_text: false,
    },
    Template {
        id: "61579",
        name: "One Does Not Simply",
        top_text: true,
        bottom_text: true,
    },
    Template {
        id: "55311130",
        name: "This Is Fine",
        top_text: false,
        bottom_text: true,
    },
    Template {
        id: "93895088",
        name: "Expanding Brain",
        top_text: true,
        bottom_text: true,
    },
];

pub const DEFAULT_TEMPLATE_ID: &str = "181913649";

/// A template as reported by the rendering provider's catalog endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RemoteTemplate {
    pub id: String,
    pub name: String,
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub box_count: u32,
}
