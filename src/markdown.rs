//! Inline Markdown
//!
//! Renders the short Markdown snippets in the content fixtures
//! (recipe steps, chef tips, project blurbs) with pulldown-cmark.
//! Raw HTML in the source is escaped rather than passed through.

use pulldown_cmark::{html::push_html, Event, Options, Parser};

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_SMART_PUNCTUATION
}

/// Parse markdown to HTML
pub fn render(text: &str) -> String {
    let events = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(html) | Event::InlineHtml(html) => Event::Text(html),
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}

/// Parse markdown for inline use (strips outer <p> tags)
pub fn render_inline(text: &str) -> String {
    let html = render(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .filter(|s| !s.contains("<p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_strips_paragraph() {
        assert_eq!(
            render_inline("**Serve:** Plate the salmon."),
            "<strong>Serve:</strong> Plate the salmon."
        );
    }

    #[test]
    fn test_multiple_paragraphs_keep_tags() {
        let html = render_inline("one\n\ntwo");
        assert!(html.starts_with("<p>one</p>"));
        assert!(html.contains("<p>two</p>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_inline("hi <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
