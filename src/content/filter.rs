//! The tag filter store.
//!
//! A single optional tag selection shared between the navigation renderer
//! (which writes it) and the list renderer (which reads it). The store is
//! owned by whoever drives a render pass and passed down by reference, so
//! its lifetime is explicitly scoped to that pass rather than living in a
//! module-level global.
//!
//! There is exactly one writer per pass and arbitrarily many readers; all
//! access is synchronous, so no interior mutability or locking is involved.

/// Current tag selection: `Some(tag)` or no filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    selected: Option<String>,
}

impl TagFilter {
    /// A fresh store with no selection.
    pub const fn new() -> Self {
        Self { selected: None }
    }

    /// Replace the selection unconditionally.
    ///
    /// No validation against the tag registry: selecting a tag with zero
    /// matching documents is valid and simply yields an empty list view.
    pub fn set(&mut self, tag: impl Into<String>) {
        self.selected = Some(tag.into());
    }

    /// Current selection.
    pub fn get(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Drop the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        assert_eq!(TagFilter::new().get(), None);
        assert_eq!(TagFilter::default().get(), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut filter = TagFilter::new();
        filter.set("rust");
        assert_eq!(filter.get(), Some("rust"));
    }

    #[test]
    fn test_set_replaces() {
        let mut filter = TagFilter::new();
        filter.set("rust");
        filter.set("js");
        assert_eq!(filter.get(), Some("js"));
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut filter = TagFilter::new();
        filter.set("rust");
        let first = filter.clone();
        filter.set("rust");
        assert_eq!(filter, first);
    }

    #[test]
    fn test_clear() {
        let mut filter = TagFilter::new();
        filter.set("rust");
        filter.clear();
        assert_eq!(filter.get(), None);
    }

    #[test]
    fn test_unknown_tag_is_allowed() {
        // No registry validation; resolution happens at list time.
        let mut filter = TagFilter::new();
        filter.set("no-such-tag");
        assert_eq!(filter.get(), Some("no-such-tag"));
    }
}
