//! Site initialization module.
//!
//! Creates new site structure with default configuration and a sample post.

use crate::{
    cli::Commands,
    config::SiteConfig,
    log,
};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Default config filename
const CONFIG_FILE: &str = "quill.toml";

/// Default site directory structure
const SITE_DIRS: &[&str] = &["content", "assets/images", "assets/styles"];

const SAMPLE_POST: &str = r#"---
title: Hello, World
date: {date}
tags:
  - meta
description: The first post on this site.
---

# Hello, World

Write your posts as Markdown files in the `content` directory. Each file
starts with a front-matter block like the one above.

- `published: false` keeps a draft out of the site entirely.
- `listed: false` publishes a page without listing it on the home page.
"#;

const SAMPLE_STYLESHEET: &str = "body {\n    max-width: 42rem;\n    margin: 0 auto;\n    padding: 1rem;\n    font-family: system-ui, sans-serif;\n    line-height: 1.6;\n}\n\nnav.tags ul {\n    display: flex;\n    gap: 0.75rem;\n    list-style: none;\n    padding: 0;\n}\n\nnav.tags a.active {\n    font-weight: bold;\n}\n";

/// Create a new site with default structure
pub fn new_site(config: &'static SiteConfig) -> Result<()> {
    let root = config.get_root();
    let has_name = matches!(config.get_cli().command, Commands::Init { name: Some(_) });

    // Safety check: if no name was provided (init in current dir),
    // the directory must be completely empty
    if !has_name && !is_dir_empty(root)? {
        bail!(
            "Current directory is not empty. Use `quill init <SITE_NAME>` to create in a subdirectory."
        );
    }

    init_site_structure(root)?;
    init_default_config(root)?;
    init_sample_content(root)?;
    init_ignored_files(root, &[Path::new("public/")])?;

    log!("init"; "new site created at {}", root.display());
    Ok(())
}

/// Check if a directory is completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Write default configuration file
fn init_default_config(root: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(root.join(CONFIG_FILE), content)?;
    Ok(())
}

/// Create site directory structure
fn init_site_structure(root: &Path) -> Result<()> {
    for dir in SITE_DIRS {
        let path = root.join(dir);
        if path.exists() {
            bail!(
                "Path `{}` already exists. Try `quill init <SITE_NAME>` instead.",
                path.display()
            );
        }
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
    }
    Ok(())
}

/// Write a sample post and stylesheet so the first build has content
fn init_sample_content(root: &Path) -> Result<()> {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let post = SAMPLE_POST.replace("{date}", &today);

    fs::write(root.join("content").join("hello-world.md"), post)?;
    fs::write(
        root.join("assets").join("styles").join("main.css"),
        SAMPLE_STYLESHEET,
    )?;
    Ok(())
}

/// Initialize .gitignore and .ignore files with specified paths
fn init_ignored_files(root: &Path, paths: &[&Path]) -> Result<()> {
    let content = paths
        .iter()
        .filter_map(|p| p.to_str())
        .collect::<Vec<_>>()
        .join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_is_dir_empty() {
        let dir = tempdir().unwrap();
        assert!(is_dir_empty(dir.path()).unwrap());

        fs::write(dir.path().join("file"), "x").unwrap();
        assert!(!is_dir_empty(dir.path()).unwrap());

        // non-existent counts as empty
        assert!(is_dir_empty(&dir.path().join("missing")).unwrap());
    }

    #[test]
    fn test_init_site_structure() {
        let dir = tempdir().unwrap();
        init_site_structure(dir.path()).unwrap();

        assert!(dir.path().join("content").is_dir());
        assert!(dir.path().join("assets/styles").is_dir());

        // second init in the same place is rejected
        assert!(init_site_structure(dir.path()).is_err());
    }

    #[test]
    fn test_init_default_config_roundtrips() {
        let dir = tempdir().unwrap();
        init_default_config(dir.path()).unwrap();

        let written = fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        let parsed = SiteConfig::from_str(&written).unwrap();
        assert_eq!(parsed.serve.port, SiteConfig::default().serve.port);
    }

    #[test]
    fn test_init_sample_content_parses() {
        let dir = tempdir().unwrap();
        init_site_structure(dir.path()).unwrap();
        init_sample_content(dir.path()).unwrap();

        let post = dir.path().join("content").join("hello-world.md");
        let doc = crate::content::Document::from_path(&post).unwrap();
        assert_eq!(doc.id, "hello-world");
        assert_eq!(doc.title, "Hello, World");
        assert!(doc.is_listed());
    }

    #[test]
    fn test_init_ignored_files_preserves_existing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "custom\n").unwrap();

        init_ignored_files(dir.path(), &[Path::new("public/")]).unwrap();

        let gitignore = fs::read_to_string(dir.path().join(".gitignore")).unwrap();
        assert_eq!(gitignore, "custom\n");
        let ignore = fs::read_to_string(dir.path().join(".ignore")).unwrap();
        assert_eq!(ignore, "public/");
    }
}
