//! Markdown to HTML translation for entry content.
//!
//! Total over arbitrary input: whatever bytes an entry file holds, this
//! produces some HTML string and never fails.

use pulldown_cmark::{html, Options, Parser};

/// Render an entry's Markdown content as an HTML fragment.
pub fn to_html(markup: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markup, options);
    let mut out = String::with_capacity(markup.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings() {
        let html = to_html("# Rust");
        assert!(html.contains("<h1>Rust</h1>"));
    }

    #[test]
    fn renders_emphasis_and_lists() {
        let html = to_html("*hi*\n\n- one\n- two\n");
        assert!(html.contains("<em>hi</em>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn plain_text_becomes_paragraph() {
        let html = to_html("just words");
        assert!(html.contains("<p>just words</p>"));
    }

    #[test]
    fn total_on_arbitrary_input() {
        // Never panics, whatever the entry file contains.
        let _ = to_html("");
        let _ = to_html("<<<[[[ ***");
        let _ = to_html("\u{0}\u{1}weird bytes");
    }
}
