//! Component and route types.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

use super::element::{ElementInfo, PropInfo};
use super::framework::Framework;

/// A source file recognized as one primary UI component.
///
/// Created once per scan pass over a file and never mutated by later
/// passes; a re-scan builds fresh values.
///
/// # Examples
///
/// ```
/// use uxqa_core::{ComponentInfo, Framework};
/// use camino::Utf8PathBuf;
///
/// let component = ComponentInfo::new(Utf8PathBuf::from("LoginForm.tsx"), "LoginForm", Framework::React);
/// assert!(!component.has_tests);
/// assert_eq!(component.element_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInfo {
    /// File path, relative to the scan root once scanning completes.
    pub path: Utf8PathBuf,

    /// Component name from its declaration or the file stem.
    pub name: String,

    /// Framework the component was analyzed as.
    pub framework: Framework,

    /// Interactive elements in source order.
    pub elements: Vec<ElementInfo>,

    /// Declared props.
    pub props: Vec<PropInfo>,

    /// Route strings referenced in the file, de-duplicated.
    pub routes: Vec<String>,

    /// Whether a matching test file was found.
    pub has_tests: bool,

    /// The matching test file, when found.
    pub test_file_path: Option<Utf8PathBuf>,
}

impl ComponentInfo {
    /// Creates a component with no elements, props, routes or tests.
    #[must_use]
    pub fn new(path: Utf8PathBuf, name: impl Into<String>, framework: Framework) -> Self {
        Self {
            path,
            name: name.into(),
            framework,
            elements: Vec::new(),
            props: Vec::new(),
            routes: Vec::new(),
            has_tests: false,
            test_file_path: None,
        }
    }

    /// Returns the number of interactive elements.
    #[inline]
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Returns the number of elements that already carry a test id.
    #[must_use]
    pub fn elements_with_test_id(&self) -> usize {
        self.elements.iter().filter(|e| e.has_test_id()).count()
    }

    /// Returns an iterator over elements without a test id.
    pub fn elements_missing_test_id(&self) -> impl Iterator<Item = &ElementInfo> {
        self.elements.iter().filter(|e| !e.has_test_id())
    }
}

/// A unique route path seen across all components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteInfo {
    /// Route path string.
    pub path: String,
    /// Name of the first component referencing the route.
    pub component: String,
    /// `true` if any component referencing the route has tests.
    pub has_tests: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ElementType;

    #[test]
    fn test_element_counts() {
        let mut component =
            ComponentInfo::new(Utf8PathBuf::from("Nav.tsx"), "Nav", Framework::React);
        let mut tagged = ElementInfo::new(ElementType::Link, "a", "home-a", 3);
        tagged.test_id = Some("home-link".to_owned());
        component.elements.push(tagged);
        component
            .elements
            .push(ElementInfo::new(ElementType::Button, "button", "menu-button", 4));

        assert_eq!(component.element_count(), 2);
        assert_eq!(component.elements_with_test_id(), 1);
        let missing: Vec<_> = component.elements_missing_test_id().collect();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].suggested_test_id, "menu-button");
    }

    #[test]
    fn test_component_serialization_uses_camel_case() {
        let component = ComponentInfo::new(Utf8PathBuf::from("a/B.tsx"), "B", Framework::React);
        let json = serde_json::to_string(&component).unwrap();
        assert!(json.contains("\"hasTests\":false"));
        assert!(json.contains("\"testFilePath\":null"));
        assert!(json.contains("\"framework\":\"react\""));
    }
}
