//! Document detail view.
//!
//! Renders a single document's full content. Filter-independent: the
//! navigation is rendered with an empty selection, and unlisted documents
//! get detail pages like any other published document.

use crate::config::SiteConfig;
use crate::content::{ContentIndex, Document, TagFilter};
use crate::render::{self, escape_html, nav};
use crate::utils::slug::slugify;

/// Render a complete detail page for one document.
pub fn render_page(config: &SiteConfig, index: &ContentIndex, doc: &Document) -> String {
    // Detail pages carry no filter selection.
    let filter = TagFilter::new();
    let nav_html = nav::render(&index.tags(), &filter);

    let title = escape_html(&doc.title);
    let date = doc.date.format("%Y-%m-%d");
    let updated = doc
        .updated
        .map(|d| format!("<p class=\"updated\">updated {}</p>\n", d.format("%Y-%m-%d")))
        .unwrap_or_default();

    let tags: String = doc
        .tags
        .iter()
        .map(|tag| {
            format!(
                "<a class=\"tag\" href=\"/tags/{}/\">{}</a>\n",
                slugify(tag),
                escape_html(tag)
            )
        })
        .collect();

    let main = format!(
        "<article>\n<h1>{title}</h1>\n<time datetime=\"{date}\">{date}</time>\n{updated}{body}\n<div class=\"tags\">\n{tags}</div>\n</article>",
        body = doc.body,
    );

    let page_title = format!("{} - {}", doc.title, config.base.title);
    render::page(config, &page_title, &nav_html, &main)
}
