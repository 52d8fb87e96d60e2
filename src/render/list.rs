//! Document list view.
//!
//! Reads the filter store and the content index, renders the visible
//! subset. The full eligible set is re-derived on every call; the index is
//! small and static, so there is no incremental path.

use crate::config::SiteConfig;
use crate::content::{ContentIndex, TagFilter};
use crate::render::{self, escape_html, nav};

/// Render a complete list page for the current filter selection.
pub fn render_page(config: &SiteConfig, index: &ContentIndex, filter: &TagFilter) -> String {
    let documents = index.documents(filter.get());
    let nav_html = nav::render(&index.tags(), filter);

    let title = match filter.get() {
        Some(tag) => format!("{} - {}", config.base.title, tag),
        None => config.base.title.clone(),
    };

    let items: String = documents.iter().map(|doc| list_item(doc)).collect();
    let main = if documents.is_empty() {
        "<p class=\"empty\">No articles here yet.</p>".to_owned()
    } else {
        format!("<ul class=\"articles\">\n{items}</ul>")
    };

    render::page(config, &title, &nav_html, &main)
}

fn list_item(doc: &crate::content::Document) -> String {
    let title = escape_html(&doc.title);
    let href = format!("/posts/{}/", doc.id);
    let date = doc.date.format("%Y-%m-%d");

    let description = doc
        .description
        .as_deref()
        .map(|d| format!("<p class=\"description\">{}</p>\n", escape_html(d)))
        .unwrap_or_default();

    format!(
        "<li>\n<time datetime=\"{date}\">{date}</time>\n<a href=\"{href}\">{title}</a>\n{description}</li>\n"
    )
}
