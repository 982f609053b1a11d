//! Scheme checks for content-supplied URLs before they become `href`s.

/// Absolute `http://` or `https://` URL.
pub fn is_web_url(url: &str) -> bool {
    let url = url.trim_start().to_ascii_lowercase();
    url.starts_with("http://") || url.starts_with("https://")
}

/// Web URLs, `mailto:` and same-site paths or anchors. Anything else
/// (`javascript:`, `data:`, ...) is rendered as plain text.
pub fn is_safe_link(url: &str) -> bool {
    let trimmed = url.trim_start();
    is_web_url(trimmed)
        || trimmed.to_ascii_lowercase().starts_with("mailto:")
        || (trimmed.starts_with('/') && !trimmed.starts_with("//"))
        || trimmed.starts_with('#')
}
