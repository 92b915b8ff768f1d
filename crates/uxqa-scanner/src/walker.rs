//! Directory traversal with include/exclude glob filtering.
//!
//! This module provides [`FileWalker`], which uses the `ignore` crate to walk
//! a directory tree and `globset` to select files by pattern.
//!
//! # Features
//!
//! - Matches root-relative paths against include and exclude [`GlobSet`]s
//! - Skips hidden directories and files
//! - Prunes `node_modules` and `.git` without descending into them
//! - Does not apply `.gitignore` rules; the glob patterns decide
//! - Converts paths to UTF-8 [`Utf8PathBuf`](camino::Utf8PathBuf)
//!
//! # Examples
//!
//! ```no_run
//! use uxqa_scanner::FileWalker;
//! use camino::Utf8Path;
//!
//! let walker = FileWalker::new(
//!     Utf8Path::new("./src"),
//!     &["**/*.tsx".to_owned()],
//!     &["**/*.test.*".to_owned()],
//! )?;
//!
//! for path in walker.collect_paths()? {
//!     println!("Found: {path}");
//! }
//! # Ok::<(), uxqa_scanner::ScanError>(())
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use tracing::warn;

use crate::error::ScanError;

/// Directories never descended into, regardless of patterns.
const PRUNED_DIRECTORIES: &[&str] = &["node_modules", ".git"];

/// A file walker that discovers files matching glob patterns.
///
/// # Design
///
/// The walker uses a "collect-then-parallelize" pattern:
/// 1. Walker collects all paths first (single-threaded, I/O bound)
/// 2. Paths are then analyzed in parallel with rayon
#[derive(Debug)]
pub struct FileWalker {
    /// The root directory to walk.
    root: Utf8PathBuf,
    /// Patterns a root-relative path must match.
    include: GlobSet,
    /// Patterns removing otherwise included paths.
    exclude: GlobSet,
}

impl FileWalker {
    /// Creates a new file walker for the given root directory.
    ///
    /// The root is not checked here; a missing root yields an empty file
    /// list from [`collect_paths`](Self::collect_paths).
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Glob`] if any pattern is not a valid glob.
    pub fn new(root: &Utf8Path, include: &[String], exclude: &[String]) -> Result<Self, ScanError> {
        Ok(Self {
            root: root.to_owned(),
            include: build_globset(include)?,
            exclude: build_globset(exclude)?,
        })
    }

    /// Collects all matching file paths, sorted.
    ///
    /// Returned paths are the root joined with the relative path, so they
    /// are absolute exactly when the root is.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Walk`] if directory traversal fails.
    /// Returns [`ScanError::NonUtf8Path`] if a non-UTF-8 path is encountered.
    pub fn collect_paths(&self) -> Result<Vec<Utf8PathBuf>, ScanError> {
        if !self.root.is_dir() {
            warn!(root = %self.root, "Scan root does not exist or is not a directory");
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        for result in self.build_walker() {
            let entry = result?;

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.path();
            let utf8_path =
                Utf8Path::from_path(path).ok_or_else(|| ScanError::NonUtf8Path(path.to_owned()))?;

            if self.is_selected(utf8_path) {
                paths.push(utf8_path.to_owned());
            }
        }

        paths.sort();
        Ok(paths)
    }

    /// Builds the ignore walker with configured settings.
    fn build_walker(&self) -> ignore::Walk {
        WalkBuilder::new(&self.root)
            // Patterns decide what is scanned, not VCS ignore files
            .standard_filters(false)
            .hidden(true)
            .follow_links(false)
            .threads(1)
            .filter_entry(|entry| {
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                !(is_dir
                    && entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| PRUNED_DIRECTORIES.contains(&name)))
            })
            .build()
    }

    /// Checks a path against the include and exclude sets.
    fn is_selected(&self, path: &Utf8Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        self.include.is_match(relative.as_str()) && !self.exclude.is_match(relative.as_str())
    }
}

/// Compiles patterns into a set; `*` does not cross directory separators.
fn build_globset(patterns: &[String]) -> Result<GlobSet, ScanError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns.iter().map(|p| p.trim()).filter(|p| !p.is_empty()) {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|source| ScanError::glob(pattern, source))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|source| ScanError::glob(patterns.join(","), source))
}
