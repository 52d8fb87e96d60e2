//! Slugification for document ids and tag URLs.
//!
//! Document ids come from source filenames; tag page paths come from raw
//! tag strings. Both go through the same transliterate-and-sanitize step.

use deunicode::deunicode;

/// Convert arbitrary text to a URL-safe slug.
///
/// - Transliterates unicode to ASCII (`café` → `cafe`)
/// - Lowercases
/// - Collapses any run of non-alphanumeric characters into a single `-`
/// - Trims leading/trailing separators
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut prev_sep = true;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            prev_sep = false;
        } else if !prev_sep {
            slug.push('-');
            prev_sep = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// Derive a document id from a source file stem.
///
/// `My First Post.md` → `my-first-post`
pub fn slug_from_stem(stem: &str) -> String {
    slugify(stem)
}
