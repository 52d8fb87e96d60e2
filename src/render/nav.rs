//! Tag navigation.
//!
//! Renders the tag registry as a link list and highlights the selection it
//! reads from the filter store. The store is injected by the caller; this
//! module never mutates it.

use crate::content::TagFilter;
use crate::render::escape_html;
use crate::utils::slug::slugify;

/// Render the navigation fragment for the given registry and selection.
///
/// The "all" link clears the filter; each tag links to its list page. The
/// active entry gets `class="active"` for styling.
pub fn render(tags: &[&str], filter: &TagFilter) -> String {
    let selected = filter.get();

    let mut items = String::new();
    items.push_str(&nav_item("all", "/", selected.is_none()));

    for tag in tags {
        let href = format!("/tags/{}/", slugify(tag));
        items.push_str(&nav_item(tag, &href, selected == Some(*tag)));
    }

    format!("<nav class=\"tags\">\n<ul>\n{items}</ul>\n</nav>")
}

fn nav_item(label: &str, href: &str, active: bool) -> String {
    let label = escape_html(label);
    if active {
        format!("<li><a class=\"active\" href=\"{href}\">{label}</a></li>\n")
    } else {
        format!("<li><a href=\"{href}\">{label}</a></li>\n")
    }
}
