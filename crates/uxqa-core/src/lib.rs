//! Core types, configuration, and naming utilities for uxqa-scanner.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - Domain types ([`ComponentInfo`], [`ElementInfo`], [`PropInfo`],
//!   [`RouteInfo`], [`CoverageStats`], [`Framework`])
//! - Configuration ([`ScannerConfig`], [`GenerateOptions`])
//! - The [`ConfigError`] type
//! - Kebab-case and test-id suggestion helpers in [`naming`]
//! - Type aliases for `FxHashMap`/`FxHashSet`

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod hash;
pub mod naming;
pub mod types;

pub use config::{GenerateOptions, ScannerConfig, CONFIG_FILE_NAME};
pub use error::ConfigError;
pub use hash::{fx_hash_map_with_capacity, fx_hash_set_with_capacity, FxHashMap, FxHashSet};
pub use types::{
    percent, ComponentInfo, CoverageStats, ElementInfo, ElementType, Framework, PropInfo,
    PropType, RouteInfo,
};
