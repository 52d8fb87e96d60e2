//! The validated document record.
//!
//! `Document` is the **single source of truth** for an article: the index,
//! the renderers, and the feed all read from it. It only ever exists in a
//! validated state; constructing one from a source file fails the build on
//! malformed input instead of letting half-parsed data through.

use crate::content::{frontmatter, markdown};
use crate::utils::slug::slug_from_stem;
use chrono::NaiveDate;
use std::{fs, path::{Path, PathBuf}};
use thiserror::Error;

/// Content pipeline errors, all carrying the offending source path.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("`{0}`: missing or unterminated front-matter block")]
    FrontMatter(PathBuf),

    #[error("`{0}`: front-matter parsing error")]
    Yaml(PathBuf, #[source] serde_yaml::Error),

    #[error("`{path}`: invalid {field} date `{value}` (expected YYYY-MM-DD)")]
    InvalidDate {
        path: PathBuf,
        field: &'static str,
        value: String,
    },

    #[error("`{0}`: title must not be empty")]
    EmptyTitle(PathBuf),

    #[error("`{0}`: filename does not yield a usable id")]
    EmptyId(PathBuf),

    #[error("duplicate document id `{id}` (`{first}` and `{second}`)")]
    DuplicateId {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// A fully parsed and validated article.
#[derive(Debug, Clone)]
pub struct Document {
    /// Stable identifier, slugified from the source file stem.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Publicly visible at all (detail and list).
    pub published: bool,
    /// Included in list views; unlisted documents stay link-reachable.
    pub listed: bool,
    /// Publication date; list views sort by it descending.
    pub date: NaiveDate,
    /// Last update, display only.
    pub updated: Option<NaiveDate>,
    /// De-duplicated, first-seen order preserved.
    pub tags: Vec<String>,
    /// Optional teaser/description.
    pub description: Option<String>,
    /// Rendered HTML body. Opaque to the index.
    pub body: String,
    /// Source file, for error reporting and duplicate-id diagnostics.
    pub source: PathBuf,
}

impl Document {
    /// Read, parse, validate, and render a single source file.
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let source = fs::read_to_string(path)
            .map_err(|err| DocumentError::Io(path.to_path_buf(), err))?;
        Self::from_source(path, &source)
    }

    /// Parse a document from in-memory source (split out for tests).
    pub fn from_source(path: &Path, source: &str) -> Result<Self, DocumentError> {
        let (matter, body) = frontmatter::split(source)
            .ok_or_else(|| DocumentError::FrontMatter(path.to_path_buf()))?;
        let fm = frontmatter::parse(matter)
            .map_err(|err| DocumentError::Yaml(path.to_path_buf(), err))?;

        if fm.title.trim().is_empty() {
            return Err(DocumentError::EmptyTitle(path.to_path_buf()));
        }

        let id = path
            .file_stem()
            .map(|stem| slug_from_stem(&stem.to_string_lossy()))
            .filter(|id| !id.is_empty())
            .ok_or_else(|| DocumentError::EmptyId(path.to_path_buf()))?;

        let date = parse_date(path, "date", &fm.date)?;
        let updated = fm
            .updated
            .as_deref()
            .map(|value| parse_date(path, "updated", value))
            .transpose()?;

        Ok(Self {
            id,
            title: fm.title,
            published: fm.published,
            listed: fm.listed,
            date,
            updated,
            tags: dedup_tags(fm.tags),
            description: fm.description,
            body: markdown::render(body),
            source: path.to_path_buf(),
        })
    }

    /// Eligible for list views and tag aggregation.
    pub const fn is_listed(&self) -> bool {
        self.published && self.listed
    }

    /// True if the document carries the given tag (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Parse a `YYYY-MM-DD` date field.
fn parse_date(path: &Path, field: &'static str, value: &str) -> Result<NaiveDate, DocumentError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| DocumentError::InvalidDate {
        path: path.to_path_buf(),
        field,
        value: value.to_owned(),
    })
}

/// Drop duplicate tags, keeping first-seen order for stable navigation UI.
fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(tags.len());
    for tag in tags {
        if !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(source: &str) -> Result<Document, DocumentError> {
        Document::from_source(Path::new("content/My Post.md"), source)
    }

    #[test]
    fn test_from_source_full() {
        let d = doc(concat!(
            "---\n",
            "title: Adopting Rust\n",
            "date: 2022-01-01\n",
            "updated: 2022-03-15\n",
            "tags: [rust, tooling, rust]\n",
            "description: Migration notes.\n",
            "---\n",
            "# Heading\n\nSome *body* text.\n",
        ))
        .unwrap();

        assert_eq!(d.id, "my-post");
        assert_eq!(d.title, "Adopting Rust");
        assert!(d.published);
        assert!(d.listed);
        assert_eq!(d.date, NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
        assert_eq!(d.updated, NaiveDate::from_ymd_opt(2022, 3, 15));
        // duplicate tag collapsed, order kept
        assert_eq!(d.tags, vec!["rust", "tooling"]);
        assert!(d.body.contains("<h1>"));
        assert!(d.body.contains("<em>body</em>"));
    }

    #[test]
    fn test_from_source_flags() {
        let d = doc("---\ntitle: T\ndate: 2022-01-01\npublished: false\nlisted: false\n---\n")
            .unwrap();
        assert!(!d.published);
        assert!(!d.listed);
        assert!(!d.is_listed());
    }

    #[test]
    fn test_unlisted_but_published_is_not_listed() {
        let d = doc("---\ntitle: T\ndate: 2022-01-01\nlisted: false\n---\n").unwrap();
        assert!(d.published);
        assert!(!d.is_listed());
    }

    #[test]
    fn test_missing_front_matter_fails() {
        let err = doc("# Just markdown\n").unwrap_err();
        assert!(matches!(err, DocumentError::FrontMatter(_)));
    }

    #[test]
    fn test_missing_required_field_fails() {
        let err = doc("---\ntitle: T\n---\n").unwrap_err();
        assert!(matches!(err, DocumentError::Yaml(..)));
    }

    #[test]
    fn test_invalid_date_fails() {
        let err = doc("---\ntitle: T\ndate: January 1st\n---\n").unwrap_err();
        assert!(matches!(
            err,
            DocumentError::InvalidDate { field: "date", .. }
        ));
    }

    #[test]
    fn test_invalid_updated_fails() {
        let err = doc("---\ntitle: T\ndate: 2022-01-01\nupdated: soon\n---\n").unwrap_err();
        assert!(matches!(
            err,
            DocumentError::InvalidDate { field: "updated", .. }
        ));
    }

    #[test]
    fn test_empty_title_fails() {
        let err = doc("---\ntitle: \"  \"\ndate: 2022-01-01\n---\n").unwrap_err();
        assert!(matches!(err, DocumentError::EmptyTitle(_)));
    }

    #[test]
    fn test_has_tag_exact_match() {
        let d = doc("---\ntitle: T\ndate: 2022-01-01\ntags: [Rust]\n---\n").unwrap();
        assert!(d.has_tag("Rust"));
        assert!(!d.has_tag("rust"));
    }

    #[test]
    fn test_error_mentions_path() {
        let err = doc("no front matter").unwrap_err();
        assert!(format!("{err}").contains("My Post.md"));
    }
}
