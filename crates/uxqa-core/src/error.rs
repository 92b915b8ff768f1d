//! Error types for the uxqa-core crate.
//!
//! This module provides the [`ConfigError`] type for failures while loading
//! or interpreting a scanner configuration.

use camino::Utf8PathBuf;

/// Errors that can occur during configuration loading and validation.
///
/// A missing configuration file is not an error (see
/// [`ScannerConfig::load`](crate::ScannerConfig::load)); these variants
/// cover files that exist but cannot be used.
///
/// # Examples
///
/// ```
/// use uxqa_core::ConfigError;
///
/// let error = ConfigError::InvalidOption {
///     option: "framework".to_owned(),
///     reason: "expected one of react, vue, html, auto".to_owned(),
/// };
/// assert!(error.to_string().contains("framework"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration option has an invalid value.
    #[error("invalid configuration option '{option}': {reason}")]
    InvalidOption {
        /// The name of the invalid option.
        option: String,
        /// Explanation of why the option is invalid.
        reason: String,
    },

    /// An I/O error occurred while reading or writing a configuration file.
    #[error("failed to access configuration file {path}: {source}")]
    Io {
        /// The configuration file path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the configuration file.
    #[error("failed to parse configuration file {path}: {source}")]
    Parse {
        /// The configuration file path.
        path: Utf8PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize a configuration.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ConfigError {
    /// Creates a new [`ConfigError::InvalidOption`] error.
    #[inline]
    pub fn invalid_option(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            reason: reason.into(),
        }
    }
}
