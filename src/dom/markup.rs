//! Markup helpers for serializing the document model.

/// Escapes text so it can be embedded in markup or an attribute value.
///
/// # Arguments
///
/// * `text` - Raw text.
///
/// # Returns
///
/// The escaped text.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Extracts the text of a markup fragment.
///
/// Tags are dropped and the entities produced by [`escape_html`] are decoded.
/// This is not a full HTML parser; it only needs to understand the fragments
/// banners are built from.
pub fn markup_to_text(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    unescape_html(&text)
}

fn unescape_html(text: &str) -> String {
    // `&amp;` last so that "&amp;lt;" decodes to "&lt;", not "<"
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
