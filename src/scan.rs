use crate::classify::{classify, ImageType};
use crate::command::ToolSet;
use crate::constants::IGNORED_FILES_SEPARATOR;
use crate::error::Result;
use glob::glob;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// An image found during discovery, with the type it was classified as
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredImage {
    pub path: PathBuf,
    pub kind: ImageType,
}

/// Matches paths that must be left alone.
///
/// A path matches when it equals an ignored path or lies beneath an ignored
/// directory. Both sides are compared in [`normalize`]d form, so `./site/a.png`
/// from the walk and `site/a.png` from glob expansion are the same file. With
/// no ignored paths nothing matches.
#[derive(Debug, Clone, Default)]
pub struct IgnoreMatcher {
    ignored: HashSet<PathBuf>,
}

impl IgnoreMatcher {
    pub fn new(ignored: &[PathBuf]) -> Self {
        Self {
            ignored: ignored.iter().map(|path| normalize(path)).collect(),
        }
    }

    pub fn is_match(&self, path: &Path) -> bool {
        if self.ignored.is_empty() {
            return false;
        }
        normalize(path)
            .ancestors()
            .any(|ancestor| self.ignored.contains(ancestor))
    }
}

/// Drops `.` components and trailing separators: `./site/` becomes `site`.
pub fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

/// Expands a colon separated list of glob patterns relative to `root`.
///
/// Patterns that fail to parse and matches that cannot be read contribute
/// nothing.
pub fn expand_ignored_files(root: &Path, patterns: &str) -> Vec<PathBuf> {
    let mut ignored = Vec::new();

    for pattern in patterns
        .split(IGNORED_FILES_SEPARATOR)
        .filter(|p| !p.is_empty())
    {
        let full_pattern = root.join(pattern);
        match glob(&full_pattern.to_string_lossy()) {
            Ok(paths) => ignored.extend(paths.flatten()),
            Err(e) => debug!(pattern, error = %e, "ignoring invalid glob pattern"),
        }
    }

    ignored
}

/// Dot-prefixed names such as `.git`, but not `.` itself
pub fn is_hidden_name(name: &str) -> bool {
    name.len() > 1 && name.starts_with('.')
}

fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && is_hidden_name(&entry.file_name().to_string_lossy())
}

/// Walks `root` depth-first and returns every supported image.
///
/// Hidden directories are pruned without descending, ignored files are never
/// classified. Entries that cannot be read are logged and skipped; a failing
/// classifier aborts the walk.
pub fn discover_images(
    root: &Path,
    ignore: &IgnoreMatcher,
    tools: &ToolSet,
) -> Result<Vec<DiscoveredImage>> {
    let mut images = Vec::new();

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_hidden_dir(e))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if ignore.is_match(path) {
            debug!(path = %path.display(), "ignored");
            continue;
        }

        let kind = classify(tools, path)?;
        if kind.is_supported() {
            debug!(path = %path.display(), kind = %kind, "found image");
            images.push(DiscoveredImage {
                path: path.to_path_buf(),
                kind,
            });
        }
    }

    Ok(images)
}
