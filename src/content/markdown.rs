//! Markdown body rendering.

use pulldown_cmark::{Options, Parser, html};

/// Render a Markdown body to HTML.
///
/// Tables, footnotes, strikethrough, and task lists are enabled; smart
/// punctuation is left off so inline code samples survive untouched.
pub fn render(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
