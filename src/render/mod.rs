//! HTML rendering for list, detail, and navigation views.
//!
//! Pages are plain string templates assembled with `format!`, sharing one
//! outer shell (`page`). The navigation is rendered into every page from
//! the tag registry plus the current [`TagFilter`](crate::content::TagFilter)
//! selection.

pub mod detail;
pub mod list;
pub mod nav;

use crate::config::SiteConfig;

/// Minimal default stylesheet path, relative to the site root.
const STYLESHEET_HREF: &str = "/styles/main.css";

/// Escape text for safe interpolation into HTML content and attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap rendered main content in the shared page shell.
///
/// `page_title` goes into `<title>`; `nav` and `main` are pre-rendered
/// HTML fragments.
pub fn page(config: &SiteConfig, page_title: &str, nav: &str, main: &str) -> String {
    let site_title = escape_html(&config.base.title);
    let description = escape_html(&config.base.description);
    let language = escape_html(&config.base.language);
    let copyright = escape_html(&config.base.copyright);
    let title = escape_html(page_title);

    format!(
        r#"<!DOCTYPE html>
<html lang="{language}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="description" content="{description}">
<link rel="stylesheet" href="{STYLESHEET_HREF}">
<title>{title}</title>
</head>
<body>
<header>
<a class="site-title" href="/">{site_title}</a>
{nav}
</header>
<main>
{main}
</main>
<footer>{copyright}</footer>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_passthrough() {
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_escape_html_specials() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }

    #[test]
    fn test_page_shell_contains_parts() {
        let mut config = SiteConfig::default();
        config.base.title = "Fieldnotes".into();
        config.base.language = "en-US".into();

        let html = page(&config, "A Post <1>", "<nav></nav>", "<p>body</p>");

        assert!(html.contains(r#"<html lang="en-US">"#));
        assert!(html.contains("<title>A Post &lt;1&gt;</title>"));
        assert!(html.contains(">Fieldnotes</a>"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains("<nav></nav>"));
    }
}
