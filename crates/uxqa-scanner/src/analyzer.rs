//! Parallel file analysis using rayon.
//!
//! This module provides [`FileAnalyzer`], which reads and analyzes discovered
//! files in parallel, one [`ReactAnalyzer`] per worker thread.
//!
//! # Design
//!
//! Uses the "collect-then-parallelize" pattern:
//!
//! 1. Paths are collected first by [`FileWalker`](crate::FileWalker)
//! 2. `FileAnalyzer` processes paths in parallel with `rayon::par_iter()`
//! 3. Per-thread state (the tree-sitter parser) is initialized via
//!    `for_each_init()`
//! 4. Results accumulate in mutex-guarded vectors and are sorted by path
//!    afterwards, so output order never depends on scheduling

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use parking_lot::Mutex;
use rayon::prelude::*;
use tracing::{debug, warn};
use uxqa_core::{ComponentInfo, Framework};
use uxqa_parser::ReactAnalyzer;

use crate::error::ScanError;
use crate::stats::ScanStats;

/// What analyzing one file produced.
#[derive(Debug)]
pub enum FileOutcome {
    /// The file declares a component.
    Component(Box<ComponentInfo>),
    /// The file parsed but is not a component.
    NotComponent,
    /// No analyzer exists for the file's framework.
    Unsupported(Framework),
}

/// Accumulated results of a parallel analysis pass.
#[derive(Debug, Default)]
pub struct AnalysisOutput {
    /// Components found, sorted by path.
    pub components: Vec<ComponentInfo>,
    /// Files skipped because their framework has no analyzer, sorted by path.
    pub unsupported: Vec<(Utf8PathBuf, Framework)>,
    /// Recoverable per-file failures, sorted by path.
    pub failures: Vec<ScanError>,
}

/// Parallel file analyzer.
///
/// # Thread Safety
///
/// `FileAnalyzer` is both `Send` and `Sync`. It creates per-thread analyzers
/// during analysis, so no shared mutable state exists beyond the result
/// accumulators.
///
/// # Examples
///
/// ```no_run
/// use camino::Utf8PathBuf;
/// use uxqa_core::Framework;
/// use uxqa_scanner::{FileAnalyzer, ScanStats};
///
/// let analyzer = FileAnalyzer::new(Framework::Auto);
/// let paths = vec![Utf8PathBuf::from("src/App.tsx")];
/// let output = analyzer.analyze_files(&paths, &ScanStats::new());
///
/// for component in &output.components {
///     println!("{}: {} elements", component.name, component.element_count());
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FileAnalyzer {
    /// Configured framework mode.
    framework: Framework,
}

impl FileAnalyzer {
    /// Creates a new file analyzer for the given framework mode.
    #[inline]
    #[must_use]
    pub const fn new(framework: Framework) -> Self {
        Self { framework }
    }

    /// Analyzes multiple files in parallel.
    ///
    /// Each file is read and analyzed independently. Failures are collected
    /// rather than aborting the pass.
    #[must_use]
    pub fn analyze_files(&self, paths: &[Utf8PathBuf], stats: &ScanStats) -> AnalysisOutput {
        let components: Mutex<Vec<ComponentInfo>> = Mutex::new(Vec::with_capacity(paths.len()));
        let unsupported: Mutex<Vec<(Utf8PathBuf, Framework)>> = Mutex::new(Vec::new());
        let failures: Mutex<Vec<ScanError>> = Mutex::new(Vec::new());

        paths.par_iter().for_each_init(
            // Per-thread initialization: one parser per worker
            || ReactAnalyzer::new().ok(),
            |analyzer, path| {
                match self.analyze_file_inner(path, analyzer.as_mut()) {
                    Ok(FileOutcome::Component(component)) => {
                        stats.increment_analyzed();
                        stats.increment_components();
                        debug!(
                            path = %path,
                            component = %component.name,
                            elements = component.element_count(),
                            "Analyzed component"
                        );
                        components.lock().push(*component);
                    }
                    Ok(FileOutcome::NotComponent) => {
                        stats.increment_analyzed();
                        stats.increment_non_components();
                        debug!(path = %path, "No component in file");
                    }
                    Ok(FileOutcome::Unsupported(framework)) => {
                        stats.increment_unsupported();
                        debug!(path = %path, framework = %framework, "No analyzer for framework");
                        unsupported.lock().push((path.clone(), framework));
                    }
                    Err(e) => {
                        stats.increment_failures();
                        warn!(path = %path, error = %e, "Failed to analyze file");
                        failures.lock().push(e);
                    }
                }
            },
        );

        let mut output = AnalysisOutput {
            components: components.into_inner(),
            unsupported: unsupported.into_inner(),
            failures: failures.into_inner(),
        };
        output.components.sort_by(|a, b| a.path.cmp(&b.path));
        output.unsupported.sort_by(|a, b| a.0.cmp(&b.0));
        output.failures.sort_by(|a, b| a.path().cmp(&b.path()));
        output
    }

    /// Analyzes a single file.
    ///
    /// Creates its own parser instance; use
    /// [`analyze_files`](Self::analyze_files) for batches.
    ///
    /// # Errors
    ///
    /// - [`ScanError::Read`] if the file cannot be read
    /// - [`ScanError::Parse`] if the file cannot be parsed
    pub fn analyze_single(&self, path: &Utf8Path) -> Result<FileOutcome, ScanError> {
        let mut analyzer = ReactAnalyzer::new().map_err(|e| ScanError::parse(path, e))?;
        self.analyze_file_inner(path, Some(&mut analyzer))
    }

    fn analyze_file_inner(
        &self,
        path: &Utf8Path,
        analyzer: Option<&mut ReactAnalyzer>,
    ) -> Result<FileOutcome, ScanError> {
        let framework = self.framework.resolve_for(path);
        if !framework.is_supported() {
            return Ok(FileOutcome::Unsupported(framework));
        }

        let contents =
            fs::read_to_string(path.as_std_path()).map_err(|e| ScanError::read(path, e))?;

        let Some(analyzer) = analyzer else {
            return Err(ScanError::parse(path, uxqa_parser::ParseError::LanguageInit));
        };

        let component = analyzer
            .analyze(path, &contents)
            .map_err(|e| ScanError::parse(path, e))?;

        Ok(component.map_or(FileOutcome::NotComponent, |c| {
            FileOutcome::Component(Box::new(c))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Utf8Path, name: &str, contents: &str) -> Utf8PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_analyze_single_component() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();
        let path = write(root, "Save.tsx", "export const Save = () => <button>Save</button>;");

        let outcome = FileAnalyzer::new(Framework::Auto).analyze_single(&path).unwrap();
        let FileOutcome::Component(component) = outcome else {
            panic!("expected a component, got {outcome:?}");
        };
        assert_eq!(component.name, "Save");
    }

    #[test]
    fn test_unsupported_framework_skips_reading() {
        let outcome = FileAnalyzer::new(Framework::Auto)
            .analyze_single(Utf8Path::new("does/not/exist/Widget.vue"))
            .unwrap();
        assert!(matches!(outcome, FileOutcome::Unsupported(Framework::Vue)));

        let outcome = FileAnalyzer::new(Framework::Html)
            .analyze_single(Utf8Path::new("does/not/exist/App.tsx"))
            .unwrap();
        assert!(matches!(outcome, FileOutcome::Unsupported(Framework::Html)));
    }

    #[test]
    fn test_read_failure_is_recoverable() {
        let err = FileAnalyzer::new(Framework::React)
            .analyze_single(Utf8Path::new("does/not/exist/App.tsx"))
            .unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_analyze_files_sorted_and_counted() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();
        let paths = vec![
            write(root, "Zed.tsx", "export const Zed = () => <a href=\"/z\">Z</a>;"),
            write(root, "util.tsx", "export const add = (a: number, b: number) => a + b;"),
            write(root, "Alpha.tsx", "export const Alpha = () => <button>A</button>;"),
            write(root, "Broken.tsx", "export const Broken = () => (<div>"),
        ];

        let stats = ScanStats::new();
        let output = FileAnalyzer::new(Framework::Auto).analyze_files(&paths, &stats);

        let names: Vec<_> = output.components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Zed"]);
        assert_eq!(output.failures.len(), 1);
        assert!(output.failures[0].is_recoverable());
        assert!(output.failures[0].path().is_some_and(|p| p.ends_with("Broken.tsx")));

        let snap = stats.snapshot();
        assert_eq!(snap.components, 2);
        assert_eq!(snap.non_components, 1);
        assert_eq!(snap.failures, 1);
    }
}
