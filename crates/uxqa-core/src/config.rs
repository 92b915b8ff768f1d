//! Configuration structures for uxqa-scanner.
//!
//! This module provides the configuration types shared by the scanner, the
//! report/generator crate and the CLI:
//!
//! - [`ScannerConfig`] - Scan root, glob patterns, framework mode, output paths
//! - [`GenerateOptions`] - Which scaffold test categories to generate
//!
//! Both types implement [`Default`] and deserialize from the camelCase JSON
//! layout of `uxqa-scanner.config.json`. Missing keys fall back to defaults.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::Framework;

/// File name of the project-level configuration file.
pub const CONFIG_FILE_NAME: &str = "uxqa-scanner.config.json";

/// Toggles for the scaffold test generator.
///
/// Each flag enables one category of generated test case. When every
/// case-producing flag is off the generator still emits a valid, empty
/// test suite.
///
/// # Examples
///
/// ```
/// use uxqa_core::GenerateOptions;
///
/// let options = GenerateOptions::default();
/// assert!(options.include_visibility);
/// assert!(options.add_todos);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct GenerateOptions {
    /// Emit a visibility case for every element with a test id.
    pub include_visibility: bool,
    /// Emit click cases for buttons and for links with handlers.
    pub include_interactions: bool,
    /// Emit navigation cases for links with an `href`.
    pub include_navigation: bool,
    /// Emit checkbox and form submission cases.
    pub include_forms: bool,
    /// Add accessibility assertions inside generated cases.
    pub include_a11y: bool,
    /// Add `TODO` comments where a human has to finish the test.
    pub add_todos: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            include_visibility: true,
            include_interactions: true,
            include_navigation: true,
            include_forms: true,
            include_a11y: true,
            add_todos: true,
        }
    }
}

impl GenerateOptions {
    /// Returns options with every case-producing category disabled.
    ///
    /// Accessibility assertions and TODO comments keep their defaults, since
    /// neither adds test cases on its own.
    #[must_use]
    pub const fn no_cases() -> Self {
        Self {
            include_visibility: false,
            include_interactions: false,
            include_navigation: false,
            include_forms: false,
            include_a11y: true,
            add_todos: true,
        }
    }
}

/// Configuration for a scan.
///
/// # Examples
///
/// ```
/// use uxqa_core::{Framework, ScannerConfig};
///
/// let config = ScannerConfig::default();
/// assert_eq!(config.root_dir.as_str(), "./src");
/// assert_eq!(config.framework, Framework::Auto);
/// assert_eq!(config.include, vec!["**/*.tsx", "**/*.jsx"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScannerConfig {
    /// Directory to scan.
    pub root_dir: Utf8PathBuf,

    /// Directory generated scaffolds are written to.
    pub out_dir: Utf8PathBuf,

    /// Glob patterns (relative to `root_dir`) selecting files to analyze.
    pub include: Vec<String>,

    /// Glob patterns (relative to `root_dir`) removing files from the scan.
    pub exclude: Vec<String>,

    /// Framework mode. `auto` picks per file by extension.
    pub framework: Framework,

    /// Whether reports should show suggested test ids.
    pub suggest_test_ids: bool,

    /// Directory probed for `<component>.spec.ts` files.
    ///
    /// Falls back to [`out_dir`](Self::out_dir) when unset.
    pub test_dir: Option<Utf8PathBuf>,

    /// Base URL used by generated tests.
    pub base_url: String,

    /// Scaffold generation toggles.
    pub generate: GenerateOptions,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            root_dir: Utf8PathBuf::from("./src"),
            out_dir: Utf8PathBuf::from("./e2e/generated"),
            include: vec!["**/*.tsx".to_owned(), "**/*.jsx".to_owned()],
            exclude: vec![
                "**/node_modules/**".to_owned(),
                "**/dist/**".to_owned(),
                "**/build/**".to_owned(),
                "**/*.test.*".to_owned(),
                "**/*.spec.*".to_owned(),
                "**/*.stories.*".to_owned(),
            ],
            framework: Framework::Auto,
            suggest_test_ids: true,
            test_dir: None,
            base_url: "http://localhost:3000".to_owned(),
            generate: GenerateOptions::default(),
        }
    }
}

impl ScannerConfig {
    /// Creates a default configuration rooted at `root_dir`.
    #[must_use]
    pub fn with_root(root_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            ..Self::default()
        }
    }

    /// Loads a configuration file.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file exists but cannot be read and
    /// [`ConfigError::Parse`] if it is not valid configuration JSON.
    pub fn load(path: &Utf8Path) -> Result<Option<Self>, ConfigError> {
        let contents = match fs::read_to_string(path.as_std_path()) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_owned(),
                    source,
                });
            }
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_owned(),
                source,
            })
    }

    /// Serializes this configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns the directory probed for end-to-end spec files.
    #[inline]
    #[must_use]
    pub fn effective_test_dir(&self) -> &Utf8Path {
        self.test_dir.as_deref().unwrap_or(&self.out_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanner_config_defaults() {
        let config = ScannerConfig::default();
        assert_eq!(config.out_dir.as_str(), "./e2e/generated");
        assert_eq!(config.exclude.len(), 6);
        assert!(config.suggest_test_ids);
        assert!(config.test_dir.is_none());
        assert_eq!(config.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_effective_test_dir_falls_back_to_out_dir() {
        let mut config = ScannerConfig::default();
        assert_eq!(config.effective_test_dir(), Utf8Path::new("./e2e/generated"));

        config.test_dir = Some(Utf8PathBuf::from("tests/e2e"));
        assert_eq!(config.effective_test_dir(), Utf8Path::new("tests/e2e"));
    }

    #[test]
    fn test_deserialize_camel_case_with_missing_fields() {
        let json = r#"{"rootDir": "app", "framework": "react", "generate": {"addTodos": false}}"#;
        let config: ScannerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.root_dir.as_str(), "app");
        assert_eq!(config.framework, Framework::React);
        assert!(!config.generate.add_todos);
        // Other fields should have defaults
        assert!(config.generate.include_forms);
        assert_eq!(config.include, vec!["**/*.tsx", "**/*.jsx"]);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = ScannerConfig::default();
        let json = config.to_json_pretty().unwrap();
        assert!(json.contains("\"rootDir\""));
        assert!(json.contains("\"baseUrl\""));
        let parsed: ScannerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert!(ScannerConfig::load(&path).unwrap().is_none());
    }

    #[test]
    fn test_load_existing_and_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join(CONFIG_FILE_NAME)).unwrap();

        fs::write(&path, r#"{"outDir": "generated"}"#).unwrap();
        let config = ScannerConfig::load(&path).unwrap().unwrap();
        assert_eq!(config.out_dir.as_str(), "generated");

        fs::write(&path, "{ not json").unwrap();
        let err = ScannerConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_no_cases_options() {
        let options = GenerateOptions::no_cases();
        assert!(!options.include_visibility);
        assert!(!options.include_interactions);
        assert!(!options.include_navigation);
        assert!(!options.include_forms);
    }
}
