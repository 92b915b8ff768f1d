//! Domain types for uxqa-scanner.
//!
//! # Module Organization
//!
//! - [`framework`] - UI framework detection
//! - [`element`] - Interactive elements and declared props
//! - [`component`] - Components and routes
//! - [`coverage`] - Aggregate coverage counters
//!
//! All public types are re-exported here and at the crate root:
//!
//! ```
//! use uxqa_core::{ComponentInfo, CoverageStats, ElementInfo, ElementType};
//! ```

mod component;
mod coverage;
mod element;
mod framework;

pub use component::{ComponentInfo, RouteInfo};
pub use coverage::{percent, CoverageStats};
pub use element::{ElementInfo, ElementType, PropInfo, PropType};
pub use framework::Framework;
