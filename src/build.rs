//! Site building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── collect_markdown() ──► parse + validate (rayon) ──► ContentIndex
//!     │
//!     ├── emit_pages()    index.html, tags/<tag>/, posts/<id>/
//!     ├── copy_assets()   assets/** → public/**        (parallel with pages)
//!     └── build_rss()     feed.xml
//! ```
//!
//! The index is fully materialized before any page is rendered; every page
//! re-derives its visible set from it, so the emit step has no ordering
//! constraints and parallelizes freely.

use crate::{
    config::SiteConfig,
    content::{ContentIndex, Document, TagFilter},
    generator::rss::build_rss,
    log,
    render::{detail, list},
    utils::{
        collect::{collect_files, collect_markdown},
        slug::slugify,
    },
};
use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use std::{fs, path::Path};

/// Build the entire site: parse content, emit pages, copy assets, write feed.
///
/// If `config.build.clean` is true, clears the output directory first.
pub fn build_site(config: &'static SiteConfig) -> Result<()> {
    let output = &config.build.output;

    prepare_output(output, config.build.clean)?;

    // ========================================================================
    // Materialize the content index
    // ========================================================================

    let sources = collect_markdown(&config.build.content);
    let documents: Vec<Document> = sources
        .par_iter()
        .map(|path| Document::from_path(path))
        .collect::<Result<_, _>>()?;

    let index = ContentIndex::from_documents(documents)?;
    log!("content"; "indexed {} documents, {} tags", index.len(), index.tags().len());

    // ========================================================================
    // Emit pages + copy assets
    // ========================================================================

    let (pages_result, assets_result) = rayon::join(
        || emit_pages(config, &index),
        || copy_assets(config),
    );
    pages_result?;
    assets_result?;

    build_rss(config, &index)?;

    log!("build"; "done");
    Ok(())
}

/// Ensure the output directory exists, clearing it first when requested.
fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory: {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;
    Ok(())
}

/// Render and write every page of the site.
fn emit_pages(config: &'static SiteConfig, index: &ContentIndex) -> Result<()> {
    let output = &config.build.output;

    // List pages share one filter store, scoped to this pass: the home page
    // renders with the selection cleared, then each registry tag takes a
    // turn as the selection.
    let mut filter = TagFilter::new();

    filter.clear();
    write_page(
        &output.join("index.html"),
        &list::render_page(config, index, &filter),
        config,
    )?;

    for (slug, tag) in tag_slugs(index)? {
        filter.set(tag);
        write_page(
            &output.join("tags").join(&slug).join("index.html"),
            &list::render_page(config, index, &filter),
            config,
        )?;
    }

    // Detail pages for everything published, unlisted included.
    index
        .published()
        .collect::<Vec<_>>()
        .par_iter()
        .try_for_each(|doc| {
            write_page(
                &output.join("posts").join(&doc.id).join("index.html"),
                &detail::render_page(config, index, doc),
                config,
            )
        })?;

    Ok(())
}

/// Map each registry tag to its URL slug, one page path per tag.
///
/// Slugification is lossy, so two distinct tags can share a slug and an
/// all-punctuation tag yields an empty one; either would make a tag page
/// overwrite another (or land at `tags/index.html`). Both fail the build
/// with the offending tags named.
fn tag_slugs(index: &ContentIndex) -> Result<Vec<(String, &str)>> {
    let mut slugs: Vec<(String, &str)> = Vec::new();

    for tag in index.tags() {
        let slug = slugify(tag);
        if slug.is_empty() {
            bail!("tag `{tag}` produces an empty URL slug; rename it");
        }
        if let Some((_, first)) = slugs.iter().find(|(s, _)| *s == slug) {
            bail!("tags `{first}` and `{tag}` both map to the URL slug `{slug}`");
        }
        slugs.push((slug, tag));
    }

    Ok(slugs)
}

/// Write one HTML page, minifying when enabled.
fn write_page(path: &Path, html: &str, config: &SiteConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    if config.build.minify {
        let mut cfg = minify_html::Cfg::new();
        cfg.keep_closing_tags = true;
        cfg.keep_html_and_head_opening_tags = true;
        cfg.minify_css = true;
        fs::write(path, minify_html::minify(html.as_bytes(), &cfg))?;
    } else {
        fs::write(path, html)?;
    }

    Ok(())
}

/// Copy asset files verbatim, preserving their relative layout.
fn copy_assets(config: &'static SiteConfig) -> Result<()> {
    let assets = &config.build.assets;
    let output = &config.build.output;

    if !assets.exists() {
        return Ok(());
    }

    let files = collect_files(assets, |_| true);
    files.par_iter().try_for_each(|path| -> Result<()> {
        let relative = path
            .strip_prefix(assets)
            .with_context(|| format!("File is not in assets directory: {}", path.display()))?;
        let dest = output.join(relative);

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // Skip unchanged files on incremental rebuilds.
        if let (Ok(src_meta), Ok(dst_meta)) = (path.metadata(), dest.metadata())
            && let (Ok(src_time), Ok(dst_time)) = (src_meta.modified(), dst_meta.modified())
            && src_time <= dst_time
        {
            return Ok(());
        }

        fs::copy(path, &dest)
            .with_context(|| format!("Failed to copy {} to {}", path.display(), dest.display()))?;
        Ok(())
    })?;

    if !files.is_empty() {
        log!("assets"; "copied {} files", files.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn doc(id: &str, tags: &[&str], listed: bool) -> Document {
        Document {
            id: id.to_owned(),
            title: format!("Title of {id}"),
            published: true,
            listed,
            date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            updated: None,
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            description: None,
            body: String::new(),
            source: PathBuf::from(format!("{id}.md")),
        }
    }

    fn leaked_config(output: &Path) -> &'static SiteConfig {
        let mut config = SiteConfig::default();
        config.build.output = output.to_path_buf();
        config.build.minify = false;
        Box::leak(Box::new(config))
    }

    #[test]
    fn test_tag_slugs_one_page_path_per_tag() {
        let index = ContentIndex::from_documents(vec![
            doc("a", &["Rust Tips", "unix"], true),
        ])
        .unwrap();

        let slugs = tag_slugs(&index).unwrap();
        assert_eq!(
            slugs,
            vec![("rust-tips".to_owned(), "Rust Tips"), ("unix".to_owned(), "unix")]
        );
    }

    #[test]
    fn test_tag_slug_collision_fails_build() {
        // `c++` and `c--` both slugify to `c`; emitting both would let the
        // later tag page overwrite the earlier one.
        let index = ContentIndex::from_documents(vec![
            doc("cpp-post", &["c++"], true),
            doc("cminus-post", &["c--"], true),
        ])
        .unwrap();

        let err = tag_slugs(&index).unwrap_err().to_string();
        assert!(err.contains("c++"));
        assert!(err.contains("c--"));
        assert!(err.contains("`c`"));
    }

    #[test]
    fn test_empty_tag_slug_fails_build() {
        let index =
            ContentIndex::from_documents(vec![doc("a", &["!!!"], true)]).unwrap();

        let err = tag_slugs(&index).unwrap_err().to_string();
        assert!(err.contains("!!!"));
        assert!(err.contains("empty"));
    }

    #[test]
    fn test_emit_pages_writes_list_tag_and_detail_pages() {
        let dir = tempdir().unwrap();
        let config = leaked_config(dir.path());
        let index = ContentIndex::from_documents(vec![
            doc("visible", &["rust"], true),
            doc("hidden", &[], false),
        ])
        .unwrap();

        emit_pages(config, &index).unwrap();

        let home = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(home.contains("/posts/visible/"));
        assert!(!home.contains("/posts/hidden/"));

        let tag_page =
            fs::read_to_string(dir.path().join("tags/rust/index.html")).unwrap();
        assert!(tag_page.contains("/posts/visible/"));

        // unlisted but published still gets a detail page
        assert!(dir.path().join("posts/visible/index.html").is_file());
        assert!(dir.path().join("posts/hidden/index.html").is_file());
    }

    #[test]
    fn test_emit_pages_rejects_colliding_tag_pages() {
        let dir = tempdir().unwrap();
        let config = leaked_config(dir.path());
        let index = ContentIndex::from_documents(vec![
            doc("cpp-post", &["c++"], true),
            doc("cminus-post", &["c--"], true),
        ])
        .unwrap();

        assert!(emit_pages(config, &index).is_err());
        assert!(!dir.path().join("tags/c/index.html").exists());
    }
}
