//! Filesystem scanner for React component trees with parallel analysis.
//!
//! This crate discovers component files under a root directory, analyzes
//! them with `uxqa-parser`, probes for existing end-to-end tests and
//! aggregates coverage.
//!
//! # Overview
//!
//! The main entry point is [`Scanner`], which combines:
//!
//! - [`FileWalker`]: Directory traversal with include/exclude glob patterns
//! - [`FileAnalyzer`]: Parallel file processing with rayon
//! - [`find_test_file`]: Test file probing next to components and in the
//!   configured test directory
//! - [`calculate_coverage`]/[`collect_routes`]: Coverage aggregation
//! - [`ScanStats`]: Atomic statistics for progress tracking
//!
//! # Example
//!
//! ```no_run
//! use uxqa_core::ScannerConfig;
//! use uxqa_scanner::Scanner;
//!
//! let scanner = Scanner::new(ScannerConfig::with_root("./src"));
//! let result = scanner.scan()?;
//!
//! println!(
//!     "{} components, {}% with tests",
//!     result.coverage.total_components,
//!     result.coverage.component_percent()
//! );
//! for warning in &result.warnings {
//!     eprintln!("warning: {warning}");
//! }
//! # Ok::<(), uxqa_scanner::ScanError>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! Scanner (main entry point)
//!     │
//!     ├── FileWalker (collect paths)
//!     │       │
//!     │       ├── WalkBuilder (ignore crate)
//!     │       └── GlobSet include/exclude (globset crate)
//!     │
//!     ├── FileAnalyzer (parallel parsing)
//!     │       │
//!     │       └── ReactAnalyzer per worker thread (uxqa-parser)
//!     │
//!     ├── find_test_file (test probing)
//!     │
//!     ├── calculate_coverage / collect_routes
//!     │
//!     └── ScanStats (atomic counters)
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

mod analyzer;
mod coverage;
mod error;
mod probe;
mod stats;
mod walker;

pub use analyzer::{AnalysisOutput, FileAnalyzer, FileOutcome};
pub use coverage::{calculate_coverage, collect_routes};
pub use error::ScanError;
pub use probe::{find_test_file, test_file_candidates};
pub use stats::{ScanStats, StatsSnapshot};
pub use walker::FileWalker;

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use tracing::info;
use uxqa_core::{ComponentInfo, CoverageStats, RouteInfo, ScannerConfig};

/// Result of a complete scan.
///
/// Rebuilt from scratch on every [`Scanner::scan`] call.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// Components found, sorted by root-relative path.
    pub components: Vec<ComponentInfo>,

    /// Distinct routes across all components.
    pub routes: Vec<RouteInfo>,

    /// Aggregate coverage counts.
    pub coverage: CoverageStats,

    /// Human-readable notes about skipped or failed files.
    pub warnings: Vec<String>,

    /// File counters for this scan.
    pub stats: StatsSnapshot,
}

/// The main scanner for component trees.
///
/// # Examples
///
/// ```no_run
/// use uxqa_core::{Framework, ScannerConfig};
/// use uxqa_scanner::Scanner;
///
/// let mut config = ScannerConfig::with_root("./app");
/// config.framework = Framework::React;
///
/// let result = Scanner::new(config).scan()?;
/// for component in result.components.iter().filter(|c| !c.has_tests) {
///     println!("untested: {} ({})", component.name, component.path);
/// }
/// # Ok::<(), uxqa_scanner::ScanError>(())
/// ```
#[derive(Debug)]
pub struct Scanner {
    config: ScannerConfig,
    stats: ScanStats,
}

impl Scanner {
    /// Creates a new scanner with the given configuration.
    ///
    /// Patterns are compiled and the root is inspected when
    /// [`scan`](Self::scan) runs.
    #[must_use]
    pub fn new(config: ScannerConfig) -> Self {
        Self {
            config,
            stats: ScanStats::new(),
        }
    }

    /// Performs a full scan.
    ///
    /// Per-file read and parse failures, and files whose framework has no
    /// analyzer, become entries in [`ScanResult::warnings`]. A missing root
    /// directory produces an empty result.
    ///
    /// # Errors
    ///
    /// - [`ScanError::Glob`] if an include or exclude pattern is invalid
    /// - [`ScanError::Walk`] if directory traversal fails
    /// - [`ScanError::NonUtf8Path`] if a discovered path is not UTF-8
    pub fn scan(&self) -> Result<ScanResult, ScanError> {
        let root = &self.config.root_dir;
        info!(root = %root, framework = %self.config.framework, "Starting scan");

        self.stats.reset();

        let walker = FileWalker::new(root, &self.config.include, &self.config.exclude)?;
        let paths = walker.collect_paths()?;
        self.stats.add_discovered(paths.len());

        info!(count = paths.len(), "Collected component files");

        let output = FileAnalyzer::new(self.config.framework).analyze_files(&paths, &self.stats);

        let test_dir = self.config.effective_test_dir();
        let components: Vec<ComponentInfo> = output
            .components
            .into_iter()
            .map(|component| attach_tests(component, root, test_dir))
            .collect();

        let mut notes: Vec<(Utf8PathBuf, String)> = output
            .failures
            .iter()
            .map(|error| {
                let path = error
                    .path()
                    .map_or_else(Utf8PathBuf::new, |path| relative_to(root, path));
                (path, failure_message(error))
            })
            .chain(output.unsupported.iter().map(|(path, framework)| {
                (
                    relative_to(root, path),
                    format!("no analyzer available for {framework} files"),
                )
            }))
            .collect();
        notes.sort_by(|a, b| a.0.cmp(&b.0));
        let warnings = notes
            .into_iter()
            .map(|(path, message)| format!("{path}: {message}"))
            .collect();

        let routes = collect_routes(&components);
        let coverage = calculate_coverage(&components);
        let stats = self.stats.snapshot();

        info!(
            files = stats.discovered,
            components = coverage.total_components,
            tested = coverage.tested_components,
            elements = coverage.total_elements,
            with_test_id = coverage.elements_with_test_id,
            routes = coverage.total_routes,
            failures = stats.failures,
            unsupported = stats.unsupported,
            without_component = stats.without_component(),
            "Scan completed"
        );

        Ok(ScanResult {
            components,
            routes,
            coverage,
            warnings,
            stats,
        })
    }

    /// Returns the scanner configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Returns a snapshot of the statistics from the latest scan.
    #[inline]
    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}

/// Probes for a test file and rewrites paths relative to the root.
fn attach_tests(mut component: ComponentInfo, root: &Utf8Path, test_dir: &Utf8Path) -> ComponentInfo {
    if let Some(test_file) = find_test_file(&component.path, &component.name, test_dir) {
        component.has_tests = true;
        component.test_file_path = Some(relative_to(root, &test_file));
    }
    component.path = relative_to(root, &component.path);
    component
}

fn relative_to(root: &Utf8Path, path: &Utf8Path) -> Utf8PathBuf {
    path.strip_prefix(root)
        .map_or_else(|_| path.to_owned(), Utf8Path::to_owned)
}

/// Message for a per-file failure, without the path already in the warning.
fn failure_message(error: &ScanError) -> String {
    match error {
        ScanError::Read { source, .. } => source.to_string(),
        ScanError::Parse { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}
