//! Scan statistics with atomic counters.
//!
//! This module provides [`ScanStats`] for tracking scan progress and
//! [`StatsSnapshot`] for point-in-time statistics views.
//!
//! # Thread Safety
//!
//! All counters use [`AtomicU64`] with [`Relaxed`](std::sync::atomic::Ordering::Relaxed)
//! ordering. Statistics are informational and don't require strict ordering
//! guarantees.
//!
//! # Examples
//!
//! ```
//! use uxqa_scanner::ScanStats;
//!
//! let stats = ScanStats::new();
//! stats.add_discovered(2);
//! stats.increment_analyzed();
//! stats.increment_components();
//!
//! let snapshot = stats.snapshot();
//! assert_eq!(snapshot.components, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Atomic counters for scan statistics.
#[derive(Debug, Default)]
pub struct ScanStats {
    /// Files matched by the include/exclude patterns.
    discovered: AtomicU64,
    /// Files read and parsed successfully.
    analyzed: AtomicU64,
    /// Files that yielded a component.
    components: AtomicU64,
    /// Parsed files that are not components (utilities, hooks, constants).
    non_components: AtomicU64,
    /// Files whose framework has no analyzer.
    unsupported: AtomicU64,
    /// Files that failed to read or parse.
    failures: AtomicU64,
}

impl ScanStats {
    /// Creates a new [`ScanStats`] with all counters at zero.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds to the discovered files counter.
    #[inline]
    pub fn add_discovered(&self, count: usize) {
        self.discovered.fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Increments the analyzed files counter.
    #[inline]
    pub fn increment_analyzed(&self) {
        self.analyzed.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the components counter.
    #[inline]
    pub fn increment_components(&self) {
        self.components.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the non-component files counter.
    #[inline]
    pub fn increment_non_components(&self) {
        self.non_components.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the unsupported files counter.
    #[inline]
    pub fn increment_unsupported(&self) {
        self.unsupported.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the failures counter.
    #[inline]
    pub fn increment_failures(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns a point-in-time snapshot of all statistics.
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            discovered: self.discovered.load(Ordering::Relaxed),
            analyzed: self.analyzed.load(Ordering::Relaxed),
            components: self.components.load(Ordering::Relaxed),
            non_components: self.non_components.load(Ordering::Relaxed),
            unsupported: self.unsupported.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }

    /// Resets all counters to zero.
    pub fn reset(&self) {
        for counter in [
            &self.discovered,
            &self.analyzed,
            &self.components,
            &self.non_components,
            &self.unsupported,
            &self.failures,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

/// A point-in-time snapshot of scan statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    /// Files matched by the include/exclude patterns.
    pub discovered: u64,
    /// Files read and parsed successfully.
    pub analyzed: u64,
    /// Files that yielded a component.
    pub components: u64,
    /// Parsed files that are not components.
    pub non_components: u64,
    /// Files whose framework has no analyzer.
    pub unsupported: u64,
    /// Files that failed to read or parse.
    pub failures: u64,
}

impl StatsSnapshot {
    /// Returns the number of discovered files that produced no component.
    ///
    /// # Examples
    ///
    /// ```
    /// use uxqa_scanner::StatsSnapshot;
    ///
    /// let snap = StatsSnapshot {
    ///     discovered: 10,
    ///     analyzed: 8,
    ///     components: 5,
    ///     non_components: 3,
    ///     unsupported: 1,
    ///     failures: 1,
    /// };
    /// assert_eq!(snap.without_component(), 5);
    /// ```
    #[inline]
    #[must_use]
    pub const fn without_component(&self) -> u64 {
        self.non_components + self.unsupported + self.failures
    }
}
