//! Credential-free fallback renderer. Text is baked into the URL path, so a
//! well-formed link can always be produced even when every other service is
//! down.

pub const MEMEGEN_BASE: &str = "https://api.memegen.link/images";

// Imgflip template ids mean nothing to this service, so every fallback uses
// one fixed layout.
const FALLBACK_TEMPLATE: &str = "drake";

pub fn fallback_url(base: &str, top: &str, bottom: &str) -> String {
    format!(
        "{}/{}/{}/{}.png",
        base.trim_end_matches('/'),
        FALLBACK_TEMPLATE,
        segment(top),
        segment(bottom)
    )
}

fn segment(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        "_".to_string()
    } else {
        urlencoding::encode(text).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_both_text_segments() {
        let url = fallback_url(MEMEGEN_BASE, "hello world", "it's fine");
        assert_eq!(
            url,
            "https://api.memegen.link/images/drake/hello%20world/it%27s%20fine.png"
        );
    }

    #[test]
    fn empty_segments_become_underscores() {
        let url = fallback_url(MEMEGEN_BASE, "", "only bottom");
        assert_eq!(
            url,
            "https://api.memegen.link/images/drake/_/only%20bottom.png"
        );
    }
}
