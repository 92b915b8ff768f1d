//! Interactive element extraction from TSX syntax trees.
//!
//! Every opening and self-closing markup element is visited through the
//! element query. An element is kept when its tag is in the interactive tag
//! table ([`ElementType::from_tag`]) or when it carries at least one
//! recognized event handler ([`EVENT_HANDLERS`]).

use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Query, QueryCursor, Tree};
use uxqa_core::naming::suggest_test_id;
use uxqa_core::{ElementInfo, ElementType};

use crate::node::{
    decode_entities, node_line, node_text, normalize_whitespace, static_attribute_value,
};
use crate::queries::CAPTURE_ELEMENT;

/// Event-handler attributes that make any element interactive.
pub const EVENT_HANDLERS: [&str; 10] = [
    "onClick",
    "onSubmit",
    "onChange",
    "onBlur",
    "onFocus",
    "onKeyDown",
    "onKeyUp",
    "onKeyPress",
    "onMouseEnter",
    "onMouseLeave",
];

/// Extracts all interactive elements from a parsed syntax tree.
///
/// Elements are returned in source order. Fragments and member or
/// namespaced tag names (`Foo.Bar`, `svg:rect`) are skipped.
///
/// # Arguments
///
/// * `tree` - The parsed syntax tree
/// * `source` - The original source code (needed to extract text from nodes)
/// * `query` - The pre-compiled element query
pub fn extract_elements(tree: &Tree, source: &str, query: &Query) -> Vec<ElementInfo> {
    let source_bytes = source.as_bytes();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(query, tree.root_node(), source_bytes);

    let mut found: Vec<(usize, ElementInfo)> = Vec::new();
    while let Some(match_) = matches.next() {
        for capture in match_.captures {
            if capture.index != CAPTURE_ELEMENT {
                continue;
            }
            if let Some(element) = build_element(capture.node, source_bytes) {
                found.push((capture.node.start_byte(), element));
            }
        }
    }

    found.sort_by_key(|(start, _)| *start);
    found.into_iter().map(|(_, element)| element).collect()
}

/// Attribute values collected from one element.
#[derive(Debug, Default)]
struct Attributes {
    test_id: Option<String>,
    aria_label: Option<String>,
    title: Option<String>,
    href: Option<String>,
    input_type: Option<String>,
    name: Option<String>,
    id: Option<String>,
    handlers: Vec<String>,
}

impl Attributes {
    fn read(element: Node<'_>, source: &[u8]) -> Self {
        let mut attributes = Self::default();
        let mut walker = element.walk();

        for attribute in element.named_children(&mut walker) {
            if attribute.kind() != "jsx_attribute" {
                continue;
            }
            let Some(key) = attribute.named_child(0).and_then(|n| node_text(n, source)) else {
                continue;
            };
            let value = attribute
                .named_child(1)
                .and_then(|n| static_attribute_value(n, source));

            match key {
                "data-testid" => attributes.test_id = value,
                "aria-label" => attributes.aria_label = value.filter(|v| !v.trim().is_empty()),
                "title" => attributes.title = value.filter(|v| !v.trim().is_empty()),
                "href" => attributes.href = value,
                "type" => attributes.input_type = value,
                "name" => attributes.name = value,
                "id" => attributes.id = value,
                handler if EVENT_HANDLERS.contains(&handler) => {
                    attributes.handlers.push(handler.to_owned());
                }
                _ => {}
            }
        }

        attributes
    }
}

fn build_element(node: Node<'_>, source: &[u8]) -> Option<ElementInfo> {
    let tag = node
        .child_by_field_name("name")
        .and_then(|n| node_text(n, source))?;
    if tag.contains(['.', ':']) {
        return None;
    }

    let attributes = Attributes::read(node, source);
    let element_type = match ElementType::from_tag(tag) {
        Some(kind) => kind.refine_input(attributes.input_type.as_deref()),
        None if !attributes.handlers.is_empty() => ElementType::Other,
        None => return None,
    };

    let label = attributes
        .aria_label
        .or(attributes.title)
        .or_else(|| text_label(node, source));

    let suggested = suggest_test_id(
        tag,
        label.as_deref(),
        attributes.name.as_deref(),
        attributes.id.as_deref(),
    );

    let mut element = ElementInfo::new(element_type, tag, suggested, node_line(node));
    element.test_id = attributes.test_id;
    element.label = label;
    element.handlers.extend(attributes.handlers);
    element.input_type = attributes.input_type;
    element.href = attributes.href;
    element.name = attributes.name;
    element.id = attributes.id;
    Some(element)
}

/// First non-blank run of text directly inside the element.
///
/// Markup text is split around character references (`a &gt; b` is three
/// nodes), so a run joins adjacent text and reference nodes up to the next
/// expression or child element. References are decoded and whitespace is
/// collapsed.
fn text_label(opening: Node<'_>, source: &[u8]) -> Option<String> {
    if opening.kind() != "jsx_opening_element" {
        return None;
    }
    let element = opening.parent()?;
    let mut walker = element.walk();
    let mut run = String::new();

    for child in element.named_children(&mut walker) {
        if matches!(child.kind(), "jsx_text" | "html_character_reference") {
            if let Some(text) = node_text(child, source) {
                run.push_str(text);
            }
            continue;
        }
        if let Some(label) = finish_run(&run) {
            return Some(label);
        }
        run.clear();
    }

    finish_run(&run)
}

fn finish_run(run: &str) -> Option<String> {
    let label = normalize_whitespace(&decode_entities(run));
    (!label.is_empty()).then_some(label)
}

#[cfg(test)]
mod tests {
    use tree_sitter::Parser;

    use super::*;
    use crate::queries::{get_element_query, tsx_language};

    fn elements(source: &str) -> Vec<ElementInfo> {
        let mut parser = Parser::new();
        parser.set_language(&tsx_language()).unwrap();
        let tree = parser.parse(source, None).unwrap();
        extract_elements(&tree, source, get_element_query().unwrap())
    }

    #[test]
    fn test_sign_in_button() {
        let found = elements(
            r#"const A = () => <button onClick={handleLogin}>
                  Sign In
               </button>;"#,
        );
        assert_eq!(found.len(), 1);

        let button = &found[0];
        assert_eq!(button.element_type, ElementType::Button);
        assert_eq!(button.label.as_deref(), Some("Sign In"));
        assert_eq!(button.handlers.as_slice(), ["onClick".to_owned()]);
        assert_eq!(button.test_id, None);
        assert_eq!(button.suggested_test_id, "sign-in-button");
        assert_eq!(button.line, 1);
    }

    #[test]
    fn test_checkbox_input() {
        let found = elements(r#"const A = () => <input type="checkbox" name="remember" />;"#);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].element_type, ElementType::Checkbox);
        assert_eq!(found[0].input_type.as_deref(), Some("checkbox"));
        assert_eq!(found[0].suggested_test_id, "remember-input");
    }

    #[test]
    fn test_test_id_forms() {
        let found = elements(
            r#"const A = () => (
                <div>
                    <button data-testid="save">Save</button>
                    <button data-testid={"cancel"}>Cancel</button>
                    <a data-testid={`item-${id}`} href="/items">Item</a>
                    <a data-testid={`${id}-row`} href="/rows">Row</a>
                </div>
            );"#,
        );
        let ids: Vec<_> = found.iter().map(|e| e.test_id.as_deref()).collect();
        assert_eq!(ids, [Some("save"), Some("cancel"), Some("item-"), None]);
        assert_eq!(found[2].href.as_deref(), Some("/items"));
    }

    #[test]
    fn test_label_priority() {
        let found = elements(
            r#"const A = () => (
                <>
                    <button aria-label="Close dialog" title="Close">X</button>
                    <button title="Refresh">R</button>
                </>
            );"#,
        );
        assert_eq!(found[0].label.as_deref(), Some("Close dialog"));
        assert_eq!(found[1].label.as_deref(), Some("Refresh"));
    }

    #[test]
    fn test_text_label_joins_character_references() {
        let found = elements(
            r#"const A = () => (
                <>
                    <button>a &gt; b</button>
                    <button>Save&nbsp;now</button>
                    <button>Next &#8594;<span>!</span> ignored</button>
                </>
            );"#,
        );
        assert_eq!(found[0].label.as_deref(), Some("a > b"));
        assert_eq!(found[0].suggested_test_id, "a-b-button");
        assert_eq!(found[1].label.as_deref(), Some("Save now"));
        assert_eq!(found[1].suggested_test_id, "save-now-button");
        assert_eq!(found[2].label.as_deref(), Some("Next \u{2192}"));
    }

    #[test]
    fn test_text_label_skips_blank_runs() {
        let found = elements(
            r#"const A = () => (
                <a href="/docs">
                    <Icon />
                    Read the docs
                </a>
            );"#,
        );
        assert_eq!(found[0].label.as_deref(), Some("Read the docs"));
    }

    #[test]
    fn test_empty_test_id_is_absent() {
        let found = elements(r#"const A = () => <button data-testid="">Go</button>;"#);
        assert_eq!(found[0].test_id, None);
        assert!(!found[0].has_test_id());
    }

    #[test]
    fn test_non_interactive_and_member_tags_skipped() {
        let found = elements(
            r#"const A = () => (
                <div className="wrapper">
                    <Foo.Bar onClick={go} />
                    <span>text</span>
                    <div onMouseEnter={hover}>hover me</div>
                </div>
            );"#,
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].element_type, ElementType::Other);
        assert_eq!(found[0].tag, "div");
        assert_eq!(found[0].suggested_test_id, "hover-me-div");
    }

    #[test]
    fn test_source_order_and_lines() {
        let found = elements(
            "const A = () => (\n<form onSubmit={submit}>\n<input name=\"email\" />\n<textarea id=\"notes\" />\n<select name=\"country\" />\n</form>\n);",
        );
        let kinds: Vec<_> = found.iter().map(|e| (e.element_type, e.line)).collect();
        assert_eq!(
            kinds,
            [
                (ElementType::Form, 2),
                (ElementType::Input, 3),
                (ElementType::Textarea, 4),
                (ElementType::Select, 5),
            ]
        );
    }
}
