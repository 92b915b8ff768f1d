//! Aggregate coverage counters.

use serde::{Deserialize, Serialize};

/// Aggregate coverage counts for a scan.
///
/// Derived from the current set of components on every report and never
/// stored on its own.
///
/// # Examples
///
/// ```
/// use uxqa_core::CoverageStats;
///
/// let stats = CoverageStats {
///     total_components: 4,
///     tested_components: 1,
///     ..CoverageStats::default()
/// };
/// assert_eq!(stats.component_percent(), 25);
/// assert_eq!(stats.route_percent(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageStats {
    /// Number of components found.
    pub total_components: usize,
    /// Number of components with a matching test file.
    pub tested_components: usize,
    /// Number of interactive elements found.
    pub total_elements: usize,
    /// Number of elements carrying an explicit test id.
    pub elements_with_test_id: usize,
    /// Number of distinct routes.
    pub total_routes: usize,
    /// Number of distinct routes exposed by at least one tested component.
    pub tested_routes: usize,
}

impl CoverageStats {
    /// Percentage of components with tests.
    #[inline]
    #[must_use]
    pub fn component_percent(&self) -> u32 {
        percent(self.tested_components, self.total_components)
    }

    /// Percentage of elements with a test id.
    #[inline]
    #[must_use]
    pub fn test_id_percent(&self) -> u32 {
        percent(self.elements_with_test_id, self.total_elements)
    }

    /// Percentage of routes with tests.
    #[inline]
    #[must_use]
    pub fn route_percent(&self) -> u32 {
        percent(self.tested_routes, self.total_routes)
    }
}

/// Returns `round(covered / total * 100)`, or 0 when `total` is 0.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn percent(covered: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // Ratio is in [0, 1] for valid counts, so the result fits in u32.
    ((covered as f64 / total as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_zero_total() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(CoverageStats::default().test_id_percent(), 0);
    }

    #[test]
    fn test_percent_rounding() {
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(5, 5), 100);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&CoverageStats::default()).unwrap();
        assert!(json.contains("\"elementsWithTestId\":0"));
        assert!(json.contains("\"testedRoutes\":0"));
    }
}
