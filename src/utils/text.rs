use crate::models::template::Template;

/// Caps a caption at `max` characters, spending the last one on an ellipsis
/// when the input is longer.
pub fn ellipsize(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{head}…")
    }
}

pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Strips at most one leading and one trailing quote character.
pub fn strip_wrapping_quotes(text: &str) -> &str {
    let text = text
        .strip_prefix(['"', '\''])
        .unwrap_or(text);
    text.strip_suffix(['"', '\'']).unwrap_or(text)
}

/// Cleans raw model output down to one usable caption: drop the echoed
/// prompt, keep the first sentence of the first line, unquote, cap at 100
/// characters.
pub fn sanitize_caption(generated: &str, prompt: &str) -> String {
    let stripped = generated.replacen(prompt, "", 1);
    let stripped = stripped.trim();
    let first_line = stripped.lines().next().unwrap_or_default();
    let first_sentence = first_line.split('.').next().unwrap_or_default().trim();
    let unquoted = strip_wrapping_quotes(first_sentence).trim();
    ellipsize(unquoted, 100)
}

/// Splits a caption across the text regions a template actually has. With
/// two regions the caption breaks on the word midpoint (rounded up), each
/// half capped at 50 characters; with one region the first 100 characters go
/// into it.
pub fn split_caption(caption: &str, template: &Template) -> (String, String) {
    match (template.top_text, template.bottom_text) {
        (true, true) => {
            let words: Vec<&str> = caption.split_whitespace().collect();
            let mid = words.len().div_ceil(2);
            let top = truncate_chars(&words[..mid].join(" "), 50);
            let bottom = truncate_chars(&words[mid..].join(" "), 50);
            (top, bottom)
        }
        (true, false) => (truncate_chars(caption, 100), String::new()),
        (false, true) => (String::new(), truncate_chars(caption, 100)),
        (false, false) => (String::new(), String::new()),
    }
}
