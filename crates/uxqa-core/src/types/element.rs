//! Interactive element and prop types.
//!
//! This module provides [`ElementInfo`] for interactive markup elements found
//! inside a component and [`PropInfo`] for the component's declared props.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The kind of an interactive element.
///
/// # Examples
///
/// ```
/// use uxqa_core::ElementType;
///
/// assert_eq!(ElementType::from_tag("a"), Some(ElementType::Link));
/// assert_eq!(ElementType::from_tag("dialog"), Some(ElementType::Modal));
/// assert_eq!(ElementType::from_tag("div"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// `<button>`
    Button,
    /// `<a>`
    Link,
    /// `<input>` that is not a checkbox or radio.
    Input,
    /// `<textarea>`
    Textarea,
    /// `<select>`
    Select,
    /// `<input type="checkbox">`
    Checkbox,
    /// `<input type="radio">`
    Radio,
    /// `<form>`
    Form,
    /// `<dialog>`
    Modal,
    /// `<details>`
    Accordion,
    /// Any other tag carrying a recognized event handler.
    Other,
}

impl ElementType {
    /// Looks up a tag name in the interactive tag table.
    ///
    /// Returns `None` for tags that only qualify through an event handler.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "button" => Some(Self::Button),
            "a" => Some(Self::Link),
            "input" => Some(Self::Input),
            "textarea" => Some(Self::Textarea),
            "select" => Some(Self::Select),
            "form" => Some(Self::Form),
            "dialog" => Some(Self::Modal),
            "details" => Some(Self::Accordion),
            _ => None,
        }
    }

    /// Refines an input element by its `type` attribute.
    #[must_use]
    pub fn refine_input(self, input_type: Option<&str>) -> Self {
        match (self, input_type) {
            (Self::Input, Some("checkbox")) => Self::Checkbox,
            (Self::Input, Some("radio")) => Self::Radio,
            (kind, _) => kind,
        }
    }

    /// Returns the lowercase name used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Link => "link",
            Self::Input => "input",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Form => "form",
            Self::Modal => "modal",
            Self::Accordion => "accordion",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An interactive element found in a component's markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementInfo {
    /// Classified element kind.
    pub element_type: ElementType,

    /// Raw tag name as written in the source (`button`, `a`, `MyLink`).
    pub tag: String,

    /// Existing `data-testid` value, when statically known.
    pub test_id: Option<String>,

    /// Suggested test id, always computed.
    pub suggested_test_id: String,

    /// Human-readable label (`aria-label`, `title` or text content).
    pub label: Option<String>,

    /// Line of the element's opening tag (1-indexed).
    pub line: u32,

    /// Recognized event-handler attributes, in source order.
    pub handlers: SmallVec<[String; 2]>,

    /// Raw `type` attribute of an input element.
    pub input_type: Option<String>,

    /// Link target.
    pub href: Option<String>,

    /// `name` attribute.
    pub name: Option<String>,

    /// `id` attribute.
    pub id: Option<String>,
}

impl ElementInfo {
    /// Creates an element with only its kind, tag, line and suggestion set.
    #[must_use]
    pub fn new(
        element_type: ElementType,
        tag: impl Into<String>,
        suggested_test_id: impl Into<String>,
        line: u32,
    ) -> Self {
        Self {
            element_type,
            tag: tag.into(),
            test_id: None,
            suggested_test_id: suggested_test_id.into(),
            label: None,
            line,
            handlers: SmallVec::new(),
            input_type: None,
            href: None,
            name: None,
            id: None,
        }
    }

    /// Returns `true` if the element already carries a test id.
    #[inline]
    #[must_use]
    pub const fn has_test_id(&self) -> bool {
        self.test_id.is_some()
    }

    /// Returns `true` if the element has at least one event handler.
    #[inline]
    #[must_use]
    pub fn has_handlers(&self) -> bool {
        !self.handlers.is_empty()
    }
}

/// Coarse type classification of a prop.
///
/// No generic or union resolution is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropType {
    /// `string`
    String,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// A bare type reference such as `User`.
    Named(String),
    /// Anything else (unions, generics, function types, missing annotation).
    Unknown,
}

/// A prop declared in a component's `*Props` interface or type literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropInfo {
    /// Property name.
    pub name: String,
    /// Coarse type.
    pub prop_type: PropType,
    /// `false` when declared with `?`.
    pub required: bool,
}
