//! Auxiliary output generation (feeds).

pub mod rss;
