use crate::config::RenderConfig;

use wordfind_core::Highlight;

/// Markup for one list item: the matched span wrapped in the configured
/// emphasis markers, the rest as plain text.
pub fn render_highlight(highlight: &Highlight, config: &RenderConfig) -> String {
    let text = |s: &str| {
        if config.escape_html {
            escape_html(s)
        } else {
            s.to_string()
        }
    };
    if !highlight.is_match() {
        return text(&highlight.text());
    }
    format!(
        "{}{}{}{}{}",
        text(&highlight.before),
        config.emphasis_open,
        text(&highlight.matched),
        config.emphasis_close,
        text(&highlight.after)
    )
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
