//! Content pipeline: validated front-matter parsing, Markdown rendering,
//! and the build-time content index.
//!
//! # Architecture
//!
//! ```text
//! collect_markdown() ──► Document::from_path() ──► ContentIndex
//!                         (frontmatter + body)          │
//!                 ┌────────────────────┬────────────────┤
//!                 ▼                    ▼                ▼
//!           documents(filter)       get(id)          tags()
//!           (list pages)         (detail pages)   (navigation)
//! ```
//!
//! The index is materialized once per build and immutable afterwards. The
//! only mutable piece of state is [`TagFilter`], a small store owned by the
//! render pass and handed by reference to the renderers that read it.

pub mod document;
pub mod filter;
pub mod frontmatter;
pub mod index;
pub mod markdown;

pub use document::{Document, DocumentError};
pub use filter::TagFilter;
pub use index::ContentIndex;
