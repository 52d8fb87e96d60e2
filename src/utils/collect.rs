//! Recursive file collection for content and asset directories.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File names never collected, regardless of extension.
pub const IGNORED_FILE_NAMES: &[&str] = &[".DS_Store", "Thumbs.db"];

/// Collect all files under `dir` matching a predicate, sorted by path.
///
/// Hidden files (leading '.') and editor/OS artifacts are skipped. The sort
/// gives the build a deterministic document order across filesystems, which
/// the content index relies on for stable tie-breaking.
pub fn collect_files<P>(dir: &Path, should_collect: P) -> Vec<PathBuf>
where
    P: Fn(&Path) -> bool,
{
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default();
            !name.starts_with('.')
                && !IGNORED_FILE_NAMES.contains(&name)
                && should_collect(path)
        })
        .collect();

    files.sort();
    files
}

/// Collect all `*.md` files under a content directory.
pub fn collect_markdown(dir: &Path) -> Vec<PathBuf> {
    collect_files(dir, |path| {
        path.extension().is_some_and(|ext| ext == "md")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_collect_markdown_filters_and_sorts() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.md"), "b").unwrap();
        fs::write(dir.path().join("a.md"), "a").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        fs::write(dir.path().join("nested/c.md"), "c").unwrap();
        fs::write(dir.path().join(".draft.md"), "hidden").unwrap();
        fs::write(dir.path().join(".DS_Store"), "junk").unwrap();

        let files = collect_markdown(dir.path());
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.md", "b.md", "nested/c.md"]);
    }

    #[test]
    fn test_collect_files_empty_dir() {
        let dir = tempdir().unwrap();
        assert!(collect_markdown(dir.path()).is_empty());
    }

    #[test]
    fn test_collect_files_missing_dir() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(collect_markdown(&missing).is_empty());
    }

    #[test]
    fn test_collect_files_custom_predicate() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("style.css"), "body{}").unwrap();
        fs::write(dir.path().join("post.md"), "x").unwrap();

        let css = collect_files(dir.path(), |p| {
            p.extension().is_some_and(|e| e == "css")
        });
        assert_eq!(css.len(), 1);
        assert!(css[0].ends_with("style.css"));
    }
}
