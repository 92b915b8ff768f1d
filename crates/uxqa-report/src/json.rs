//! Machine-readable JSON report.

use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uxqa_core::{CoverageStats, ElementType};
use uxqa_scanner::ScanResult;

/// Top-level JSON report document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport {
    /// When the report was produced (RFC 3339, UTC).
    pub timestamp: DateTime<Utc>,
    /// Raw counts plus percentages.
    pub coverage: JsonCoverage,
    /// One summary per component.
    pub components: Vec<ComponentSummary>,
    /// Elements lacking a test id, with suggestions.
    pub suggestions: Vec<TestIdSuggestion>,
    /// Scan warnings, verbatim.
    pub warnings: Vec<String>,
}

/// Coverage counts with derived percentages.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonCoverage {
    /// Raw counts.
    #[serde(flatten)]
    pub stats: CoverageStats,
    /// Percentage of components with tests.
    pub component_percent: u32,
    /// Percentage of elements with a test id.
    pub test_id_percent: u32,
    /// Percentage of routes with tests.
    pub route_percent: u32,
}

impl From<CoverageStats> for JsonCoverage {
    fn from(stats: CoverageStats) -> Self {
        Self {
            stats,
            component_percent: stats.component_percent(),
            test_id_percent: stats.test_id_percent(),
            route_percent: stats.route_percent(),
        }
    }
}

/// Per-component entry of the JSON report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSummary {
    /// Component name.
    pub name: String,
    /// Path relative to the scan root.
    pub path: Utf8PathBuf,
    /// Whether a test file was found.
    pub has_tests: bool,
    /// The test file, when found.
    pub test_file_path: Option<Utf8PathBuf>,
    /// Number of interactive elements.
    pub element_count: usize,
    /// Number of elements with a test id.
    pub elements_with_test_id: usize,
    /// Routes the component references.
    pub routes: Vec<String>,
}

/// An element that should get a `data-testid`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestIdSuggestion {
    /// Component file, relative to the scan root.
    pub file: Utf8PathBuf,
    /// Line of the element (1-indexed).
    pub line: u32,
    /// Element kind.
    pub element_type: ElementType,
    /// Suggested `data-testid` value.
    pub suggested_test_id: String,
}

/// Builds the JSON report for a scan result.
///
/// The timestamp is passed in so callers control the clock.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use uxqa_report::build_json_report;
/// use uxqa_scanner::ScanResult;
///
/// let report = build_json_report(&ScanResult::default(), Utc::now());
/// assert!(report.components.is_empty());
/// assert_eq!(report.coverage.component_percent, 0);
/// ```
#[must_use]
pub fn build_json_report(result: &ScanResult, timestamp: DateTime<Utc>) -> JsonReport {
    let components = result
        .components
        .iter()
        .map(|c| ComponentSummary {
            name: c.name.clone(),
            path: c.path.clone(),
            has_tests: c.has_tests,
            test_file_path: c.test_file_path.clone(),
            element_count: c.element_count(),
            elements_with_test_id: c.elements_with_test_id(),
            routes: c.routes.clone(),
        })
        .collect();

    let suggestions = result
        .components
        .iter()
        .flat_map(|c| {
            c.elements_missing_test_id().map(|e| TestIdSuggestion {
                file: c.path.clone(),
                line: e.line,
                element_type: e.element_type,
                suggested_test_id: e.suggested_test_id.clone(),
            })
        })
        .collect();

    JsonReport {
        timestamp,
        coverage: result.coverage.into(),
        components,
        suggestions,
        warnings: result.warnings.clone(),
    }
}

/// Serializes a report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(report: &JsonReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
