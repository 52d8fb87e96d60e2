//! Front-matter extraction and typed parsing.
//!
//! A content source starts with a `---` fenced YAML block followed by the
//! Markdown body:
//!
//! ```text
//! ---
//! title: Adopting Rust
//! date: 2022-01-01
//! tags: [rust, tooling]
//! ---
//! body…
//! ```
//!
//! Parsing is strict: a missing or unterminated block and unparseable YAML
//! are build failures. Nothing untyped leaks past this module.

use serde::Deserialize;

/// Raw front-matter record, exactly as written by the author.
///
/// Field presence is validated here (via serde); field *content* (date
/// formats, empty title) is validated when converting into a
/// [`Document`](super::Document). Unknown keys are tolerated so authors can
/// keep private annotations in their posts.
#[derive(Debug, Clone, Deserialize)]
pub struct FrontMatter {
    pub title: String,

    /// Publication date, `YYYY-MM-DD`.
    pub date: String,

    /// Last-update date, `YYYY-MM-DD`, display only.
    #[serde(default, alias = "lastUpdateDate")]
    pub updated: Option<String>,

    /// Unpublished documents are invisible everywhere.
    #[serde(default = "default_true")]
    pub published: bool,

    /// Unlisted documents are reachable by direct link only.
    #[serde(default = "default_true")]
    pub listed: bool,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub description: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Split a source file into its front-matter block and Markdown body.
///
/// Returns `None` when the file does not open with a `---` fence or the
/// fence is never closed. The returned front-matter excludes the fences;
/// the body starts right after the closing fence line.
pub fn split(source: &str) -> Option<(&str, &str)> {
    let rest = source.strip_prefix("---")?;
    let rest = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))?;

    // Offset of `rest` within `source`, for slicing the body out of the
    // original string.
    let base = source.len() - rest.len();

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let matter = &source[base..base + offset];
            let body = &source[base + offset + line.len()..];
            return Some((matter, body));
        }
        offset += line.len();
    }

    None
}

/// Parse a front-matter block into a typed record.
pub fn parse(matter: &str) -> Result<FrontMatter, serde_yaml::Error> {
    serde_yaml::from_str(matter)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "---\ntitle: Hello\ndate: 2022-01-01\n---\nBody text.\n";

    #[test]
    fn test_split_basic() {
        let (matter, body) = split(SOURCE).unwrap();
        assert_eq!(matter, "title: Hello\ndate: 2022-01-01\n");
        assert_eq!(body, "Body text.\n");
    }

    #[test]
    fn test_split_crlf() {
        let source = "---\r\ntitle: Hello\r\ndate: 2022-01-01\r\n---\r\nBody.";
        let (matter, body) = split(source).unwrap();
        assert!(matter.contains("title: Hello"));
        assert_eq!(body, "Body.");
    }

    #[test]
    fn test_split_empty_body() {
        let source = "---\ntitle: Hello\ndate: 2022-01-01\n---\n";
        let (_, body) = split(source).unwrap();
        assert_eq!(body, "");
    }

    #[test]
    fn test_split_missing_open_fence() {
        assert!(split("title: Hello\n").is_none());
    }

    #[test]
    fn test_split_unterminated() {
        assert!(split("---\ntitle: Hello\ndate: 2022-01-01\n").is_none());
    }

    #[test]
    fn test_split_body_containing_fence() {
        // A horizontal rule in the body must not confuse the splitter once
        // the front-matter is closed.
        let source = "---\ntitle: T\ndate: 2022-01-01\n---\nintro\n\n---\n\noutro\n";
        let (_, body) = split(source).unwrap();
        assert!(body.contains("outro"));
        assert!(body.starts_with("intro"));
    }

    #[test]
    fn test_parse_full() {
        let matter = r#"
title: Adopting Rust
date: "2022-01-01"
updated: "2022-03-15"
published: false
listed: false
tags: [rust, tooling]
description: Notes from a migration.
"#;
        let fm = parse(matter).unwrap();
        assert_eq!(fm.title, "Adopting Rust");
        assert_eq!(fm.date, "2022-01-01");
        assert_eq!(fm.updated.as_deref(), Some("2022-03-15"));
        assert!(!fm.published);
        assert!(!fm.listed);
        assert_eq!(fm.tags, vec!["rust", "tooling"]);
        assert_eq!(fm.description.as_deref(), Some("Notes from a migration."));
    }

    #[test]
    fn test_parse_defaults() {
        let fm = parse("title: T\ndate: \"2022-01-01\"\n").unwrap();
        assert!(fm.published);
        assert!(fm.listed);
        assert!(fm.tags.is_empty());
        assert!(fm.description.is_none());
        assert!(fm.updated.is_none());
    }

    #[test]
    fn test_parse_missing_title_fails() {
        assert!(parse("date: \"2022-01-01\"\n").is_err());
    }

    #[test]
    fn test_parse_missing_date_fails() {
        assert!(parse("title: T\n").is_err());
    }

    #[test]
    fn test_parse_unknown_keys_tolerated() {
        let fm = parse("title: T\ndate: \"2022-01-01\"\ndraft_notes: keep\n").unwrap();
        assert_eq!(fm.title, "T");
    }

    #[test]
    fn test_parse_camel_case_update_alias() {
        let fm = parse("title: T\ndate: \"2022-01-01\"\nlastUpdateDate: \"2022-02-02\"\n").unwrap();
        assert_eq!(fm.updated.as_deref(), Some("2022-02-02"));
    }
}
