//! UI framework detection.

use std::fmt;
use std::str::FromStr;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The UI framework a source file is written for.
///
/// Only [`Framework::React`] has an analyzer. Files resolved to
/// [`Framework::Vue`] or [`Framework::Html`] are reported as unsupported
/// instead of silently contributing nothing.
///
/// # Examples
///
/// ```
/// use uxqa_core::Framework;
/// use camino::Utf8Path;
///
/// assert_eq!(Framework::from_extension(Utf8Path::new("src/App.tsx")), Framework::React);
/// assert_eq!(Framework::from_extension(Utf8Path::new("src/App.vue")), Framework::Vue);
/// assert_eq!("react".parse::<Framework>().unwrap(), Framework::React);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// React components written in JSX or TSX.
    React,
    /// Vue single-file components.
    Vue,
    /// Plain HTML markup.
    Html,
    /// Decide per file from its extension.
    #[default]
    Auto,
}

impl Framework {
    /// Infers the framework from a file extension.
    ///
    /// `.tsx`/`.jsx` map to React, `.vue` to Vue, everything else to HTML.
    #[must_use]
    pub fn from_extension(path: &Utf8Path) -> Self {
        match path.extension() {
            Some("tsx" | "jsx") => Self::React,
            Some("vue") => Self::Vue,
            _ => Self::Html,
        }
    }

    /// Resolves `Auto` for a specific file; explicit modes are returned as-is.
    #[must_use]
    pub fn resolve_for(self, path: &Utf8Path) -> Self {
        match self {
            Self::Auto => Self::from_extension(path),
            explicit => explicit,
        }
    }

    /// Returns `true` if an analyzer exists for this framework.
    #[inline]
    #[must_use]
    pub const fn is_supported(self) -> bool {
        matches!(self, Self::React)
    }

    /// Returns the lowercase name used in configuration and reports.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Vue => "vue",
            Self::Html => "html",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "react" => Ok(Self::React),
            "vue" => Ok(Self::Vue),
            "html" => Ok(Self::Html),
            "auto" => Ok(Self::Auto),
            other => Err(ConfigError::invalid_option(
                "framework",
                format!("unknown value '{other}', expected react, vue, html or auto"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Framework::from_extension(Utf8Path::new("a.jsx")), Framework::React);
        assert_eq!(Framework::from_extension(Utf8Path::new("a.tsx")), Framework::React);
        assert_eq!(Framework::from_extension(Utf8Path::new("a.vue")), Framework::Vue);
        assert_eq!(Framework::from_extension(Utf8Path::new("a.html")), Framework::Html);
        assert_eq!(Framework::from_extension(Utf8Path::new("Makefile")), Framework::Html);
    }

    #[test]
    fn test_resolve_for() {
        let path = Utf8Path::new("Widget.vue");
        assert_eq!(Framework::Auto.resolve_for(path), Framework::Vue);
        assert_eq!(Framework::React.resolve_for(path), Framework::React);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(" React ".parse::<Framework>().unwrap(), Framework::React);
        assert_eq!("AUTO".parse::<Framework>().unwrap(), Framework::Auto);
        assert!("svelte".parse::<Framework>().is_err());
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Framework::Html).unwrap(), r#""html""#);
        let parsed: Framework = serde_json::from_str(r#""vue""#).unwrap();
        assert_eq!(parsed, Framework::Vue);
    }

    #[test]
    fn test_is_supported() {
        assert!(Framework::React.is_supported());
        assert!(!Framework::Vue.is_supported());
        assert!(!Framework::Html.is_supported());
    }
}
