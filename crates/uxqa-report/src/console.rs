//! Human-readable console report.

use std::fmt;

use uxqa_core::{ComponentInfo, ElementInfo};
use uxqa_scanner::ScanResult;

/// Untested components listed before the list is cut short.
pub const MAX_UNTESTED_COMPONENTS: usize = 10;

/// Elements missing a test id listed before the list is cut short.
pub const MAX_MISSING_TEST_IDS: usize = 15;

/// Component coverage (percent) below which a recommendation is printed.
pub const COMPONENT_COVERAGE_TARGET: u32 = 80;

/// Test-id coverage (percent) below which a recommendation is printed.
pub const TEST_ID_COVERAGE_TARGET: u32 = 90;

/// A scan result rendered for a terminal.
///
/// # Examples
///
/// ```
/// use uxqa_report::ConsoleReport;
/// use uxqa_scanner::ScanResult;
///
/// let text = ConsoleReport::new(&ScanResult::default(), true).to_string();
/// assert!(text.contains("Coverage Summary"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReport<'a> {
    result: &'a ScanResult,
    suggest_test_ids: bool,
}

impl<'a> ConsoleReport<'a> {
    /// Creates a report over a scan result.
    ///
    /// With `suggest_test_ids` off, elements missing a test id are listed
    /// without the suggested value.
    #[must_use]
    pub const fn new(result: &'a ScanResult, suggest_test_ids: bool) -> Self {
        Self {
            result,
            suggest_test_ids,
        }
    }

    fn write_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coverage = &self.result.coverage;
        writeln!(f, "Coverage Summary")?;
        writeln!(
            f,
            "  Components with tests:  {:>3}% ({}/{})",
            coverage.component_percent(),
            coverage.tested_components,
            coverage.total_components
        )?;
        writeln!(
            f,
            "  Elements with test ids: {:>3}% ({}/{})",
            coverage.test_id_percent(),
            coverage.elements_with_test_id,
            coverage.total_elements
        )?;
        writeln!(
            f,
            "  Routes with tests:      {:>3}% ({}/{})",
            coverage.route_percent(),
            coverage.tested_routes,
            coverage.total_routes
        )
    }

    fn write_untested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let untested: Vec<&ComponentInfo> = self
            .result
            .components
            .iter()
            .filter(|c| !c.has_tests)
            .collect();
        if untested.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "Untested Components ({})", untested.len())?;
        for component in untested.iter().take(MAX_UNTESTED_COMPONENTS) {
            writeln!(
                f,
                "  - {} ({}) - {} {}",
                component.name,
                component.path,
                component.element_count(),
                plural(component.element_count(), "element", "elements")
            )?;
        }
        write_tail(f, untested.len(), MAX_UNTESTED_COMPONENTS)
    }

    fn write_missing_test_ids(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let missing: Vec<(&ComponentInfo, &ElementInfo)> = self
            .result
            .components
            .iter()
            .flat_map(|c| c.elements_missing_test_id().map(move |e| (c, e)))
            .collect();
        if missing.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "Elements Missing data-testid ({})", missing.len())?;
        for (component, element) in missing.iter().take(MAX_MISSING_TEST_IDS) {
            write!(
                f,
                "  - {}:{} {}",
                component.path, element.line, element.element_type
            )?;
            if self.suggest_test_ids {
                write!(f, " -> data-testid=\"{}\"", element.suggested_test_id)?;
            }
            writeln!(f)?;
        }
        write_tail(f, missing.len(), MAX_MISSING_TEST_IDS)
    }

    fn write_warnings(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.result.warnings.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "Warnings ({})", self.result.warnings.len())?;
        for warning in &self.result.warnings {
            writeln!(f, "  - {warning}")?;
        }
        Ok(())
    }

    fn write_recommendations(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coverage = &self.result.coverage;
        writeln!(f)?;
        writeln!(f, "Recommendations")?;

        let mut any = false;
        if coverage.component_percent() < COMPONENT_COVERAGE_TARGET {
            any = true;
            writeln!(
                f,
                "  - Component test coverage is below {COMPONENT_COVERAGE_TARGET}%. \
                 Run `uxqa-scanner generate --write` to scaffold tests for untested components."
            )?;
        }
        if coverage.test_id_percent() < TEST_ID_COVERAGE_TARGET {
            any = true;
            writeln!(
                f,
                "  - Test id coverage is below {TEST_ID_COVERAGE_TARGET}%. \
                 Add the suggested data-testid attributes for stable selectors."
            )?;
        }
        if !any {
            writeln!(f, "  Coverage targets met. Nice work!")?;
        }
        Ok(())
    }
}

impl fmt::Display for ConsoleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "UX QA Scanner Report")?;
        writeln!(f, "====================")?;
        writeln!(f)?;
        self.write_summary(f)?;
        self.write_untested(f)?;
        self.write_missing_test_ids(f)?;
        self.write_warnings(f)?;
        self.write_recommendations(f)
    }
}

/// Renders the console report as a string.
#[must_use]
pub fn render_console(result: &ScanResult, suggest_test_ids: bool) -> String {
    ConsoleReport::new(result, suggest_test_ids).to_string()
}

fn write_tail(f: &mut fmt::Formatter<'_>, total: usize, shown: usize) -> fmt::Result {
    if total > shown {
        writeln!(f, "  ... and {} more", total - shown)?;
    }
    Ok(())
}

const fn plural<'s>(count: usize, one: &'s str, many: &'s str) -> &'s str {
    if count == 1 { one } else { many }
}
