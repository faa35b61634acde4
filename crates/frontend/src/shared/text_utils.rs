//! Long free-text cells (descriptions, audit details).

use leptos::prelude::*;

/// Shorten to at most `max_len` characters, ending with "..." when cut
pub fn truncate_chars(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

/// Truncated text with the full value as tooltip; "-" when empty
#[component]
pub fn TruncatedCell(#[prop(into)] text: Option<String>, max_len: usize) -> impl IntoView {
    let full = text.map(|t| t.trim().to_string()).unwrap_or_default();
    if full.is_empty() {
        return view! { <span class="muted">"-"</span> }.into_any();
    }
    let short = truncate_chars(&full, max_len);
    view! { <span title=full>{short}</span> }.into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_kept() {
        assert_eq!(truncate_chars("Cabo HDMI", 120), "Cabo HDMI");
    }

    #[test]
    fn test_long_text_is_cut_on_char_boundary() {
        let text = "ação ".repeat(10);
        let cut = truncate_chars(&text, 12);
        assert!(cut.ends_with("..."));
        assert!(cut.chars().count() <= 12);
        assert!(cut.starts_with("ação ação"));
    }
}
