//! Coverage reports and test scaffolds for uxqa-scanner.
//!
//! This crate turns a [`ScanResult`](uxqa_scanner::ScanResult) into output:
//!
//! - [`render_console`]: a human-readable summary with recommendations
//! - [`build_json_report`]/[`render_json`]: a machine-readable document
//! - [`generate_test_file`]/[`generate_tests`]: Playwright scaffold files for
//!   components without tests
//!
//! Nothing here touches the filesystem; writing generated files is left to
//! the caller.

#![deny(clippy::all)]
#![warn(missing_docs)]

mod console;
mod generate;
mod json;

pub use console::{
    render_console, ConsoleReport, COMPONENT_COVERAGE_TARGET, MAX_MISSING_TEST_IDS,
    MAX_UNTESTED_COMPONENTS, TEST_ID_COVERAGE_TARGET,
};
pub use generate::{generate_test_file, generate_tests, GeneratedTest};
pub use json::{
    build_json_report, render_json, ComponentSummary, JsonCoverage, JsonReport, TestIdSuggestion,
};
