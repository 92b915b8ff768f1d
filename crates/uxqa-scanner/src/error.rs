//! Error types for the uxqa-scanner crate.
//!
//! This module provides the [`ScanError`] type for errors that can occur
//! during directory traversal and file analysis.

use camino::Utf8PathBuf;

/// Errors that can occur during scanning operations.
///
/// # Error Recovery Strategy
///
/// - **Walker errors** ([`ScanError::Walk`]): Fatal - propagate immediately
/// - **Glob errors** ([`ScanError::Glob`]): Fatal - the file set is undefined
/// - **File read errors** ([`ScanError::Read`]): Record a warning, skip file, continue scan
/// - **Parse errors** ([`ScanError::Parse`]): Record a warning, skip file, continue scan
///
/// # Examples
///
/// ```
/// use uxqa_scanner::ScanError;
///
/// fn describe(err: &ScanError) -> String {
///     match err {
///         ScanError::Walk(e) => format!("walk error: {e}"),
///         ScanError::Glob { pattern, .. } => format!("bad pattern: {pattern}"),
///         ScanError::Read { path, .. } | ScanError::Parse { path, .. } => format!("skipped {path}"),
///         ScanError::NonUtf8Path(p) => format!("invalid path: {}", p.display()),
///     }
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Failed to walk a directory.
    #[error("failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),

    /// An include or exclude pattern is not a valid glob.
    #[error("invalid glob pattern '{pattern}': {source}")]
    Glob {
        /// The offending pattern.
        pattern: String,
        /// The underlying glob error.
        #[source]
        source: globset::Error,
    },

    /// Failed to read a file.
    ///
    /// Scanning can continue by skipping this file.
    #[error("failed to read file {path}: {source}")]
    Read {
        /// The path of the file that couldn't be read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to analyze a component file.
    ///
    /// Scanning can continue by skipping this file.
    #[error("failed to parse file {path}: {source}")]
    Parse {
        /// The path of the file that couldn't be parsed.
        path: Utf8PathBuf,
        /// The underlying parse error.
        #[source]
        source: uxqa_parser::ParseError,
    },

    /// A path is not valid UTF-8.
    #[error("path is not valid UTF-8: {}", _0.display())]
    NonUtf8Path(std::path::PathBuf),
}

impl ScanError {
    /// Creates a new [`ScanError::Read`] error.
    #[inline]
    pub fn read(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a new [`ScanError::Parse`] error.
    #[inline]
    pub fn parse(path: impl Into<Utf8PathBuf>, source: uxqa_parser::ParseError) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Creates a new [`ScanError::Glob`] error.
    #[inline]
    pub fn glob(pattern: impl Into<String>, source: globset::Error) -> Self {
        Self::Glob {
            pattern: pattern.into(),
            source,
        }
    }

    /// Returns `true` if this error is recoverable (scanning can continue).
    #[inline]
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Parse { .. })
    }

    /// Returns `true` if this error is fatal (scanning should stop).
    #[inline]
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !self.is_recoverable()
    }

    /// Returns the file path associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8PathBuf> {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => Some(path),
            Self::Walk(_) | Self::Glob { .. } | Self::NonUtf8Path(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_scan_error_read() {
        let err = ScanError::read("src/Foo.tsx", io::Error::new(io::ErrorKind::NotFound, "not found"));
        assert!(err.is_recoverable());
        assert!(!err.is_fatal());
        assert_eq!(err.path().map(|p| p.as_str()), Some("src/Foo.tsx"));
        assert!(err.to_string().contains("src/Foo.tsx"));
    }

    #[test]
    fn test_scan_error_parse() {
        let err = ScanError::parse(
            "src/Bar.tsx",
            uxqa_parser::ParseError::Syntax { line: 3, column: 1 },
        );
        assert!(err.is_recoverable());
        assert_eq!(err.path().map(|p| p.as_str()), Some("src/Bar.tsx"));
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_scan_error_glob() {
        let source = globset::Glob::new("src/[").unwrap_err();
        let err = ScanError::glob("src/[", source);
        assert!(err.is_fatal());
        assert!(err.path().is_none());
        assert!(err.to_string().contains("src/["));
    }

    #[test]
    fn test_scan_error_non_utf8() {
        use std::path::PathBuf;
        let err = ScanError::NonUtf8Path(PathBuf::from("test"));
        assert!(!err.is_recoverable());
        assert!(err.path().is_none());
    }
}
