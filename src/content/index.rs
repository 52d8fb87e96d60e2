//! The build-time content index.
//!
//! Materialized once per build from the parsed documents, then treated as
//! constant: list pages, detail pages, navigation, and the feed all query
//! it, nothing mutates it.
//!
//! | Query                | Eligibility                    | Order           |
//! |----------------------|--------------------------------|-----------------|
//! | `documents(filter)`  | `published && listed` (+ tag)  | date descending |
//! | `get(id)`            | `published` (listed-agnostic)  | -               |
//! | `tags()`             | from `published && listed`     | first seen      |

use crate::content::{Document, DocumentError};
use std::collections::HashMap;

/// Immutable collection of all documents in the site.
#[derive(Debug, Default)]
pub struct ContentIndex {
    documents: Vec<Document>,
    by_id: HashMap<String, usize>,
}

impl ContentIndex {
    /// Build the index, rejecting duplicate ids.
    ///
    /// Input order is preserved and acts as the tie-break for equal dates
    /// in list queries (the collector sorts sources by path, so builds are
    /// deterministic across machines).
    pub fn from_documents(documents: Vec<Document>) -> Result<Self, DocumentError> {
        let mut by_id = HashMap::with_capacity(documents.len());

        for (pos, doc) in documents.iter().enumerate() {
            if let Some(&first) = by_id.get(&doc.id) {
                let first: &Document = &documents[first];
                return Err(DocumentError::DuplicateId {
                    id: doc.id.clone(),
                    first: first.source.clone(),
                    second: doc.source.clone(),
                });
            }
            by_id.insert(doc.id.clone(), pos);
        }

        Ok(Self { documents, by_id })
    }

    /// List-eligible documents, optionally restricted to a tag, sorted by
    /// date descending. Ties keep index order (stable sort).
    ///
    /// A filter tag matching no document yields an empty list.
    pub fn documents(&self, filter: Option<&str>) -> Vec<&Document> {
        let mut listed: Vec<&Document> = self
            .documents
            .iter()
            .filter(|doc| doc.is_listed())
            .filter(|doc| filter.is_none_or(|tag| doc.has_tag(tag)))
            .collect();

        listed.sort_by(|a, b| b.date.cmp(&a.date));
        listed
    }

    /// Look up a published document by id, regardless of its listed flag.
    ///
    /// Unknown and unpublished ids both come back as `None`; the boundary
    /// maps that to a 404.
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.by_id
            .get(id)
            .map(|&pos| &self.documents[pos])
            .filter(|doc| doc.published)
    }

    /// The tag registry: every tag used by at least one list-eligible
    /// document, duplicate-free, in first-seen order.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for doc in self.documents.iter().filter(|doc| doc.is_listed()) {
            for tag in &doc.tags {
                if !tags.contains(&tag.as_str()) {
                    tags.push(tag);
                }
            }
        }
        tags
    }

    /// All published documents, including unlisted ones (detail pages).
    pub fn published(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter().filter(|doc| doc.published)
    }

    /// Total number of documents, including unpublished ones.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
