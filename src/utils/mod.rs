//! Shared helpers for the build pipeline.

pub mod collect;
pub mod slug;
