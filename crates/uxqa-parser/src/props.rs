//! Prop shape extraction from `*Props` interfaces and type literals.

use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Query, QueryCursor, Tree};
use uxqa_core::{PropInfo, PropType};

use crate::node::{node_text, unquote};
use crate::queries::{CAPTURE_PROPS_BODY, CAPTURE_PROPS_NAME};

/// Extracts props from every interface or object type alias whose name
/// contains `Props`, in declaration order.
pub fn extract_props(tree: &Tree, source: &str, query: &Query) -> Vec<PropInfo> {
    let source_bytes = source.as_bytes();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(query, tree.root_node(), source_bytes);

    let mut props = Vec::new();
    while let Some(match_) = matches.next() {
        let mut name = None;
        let mut body = None;
        for capture in match_.captures {
            match capture.index {
                idx if idx == CAPTURE_PROPS_NAME => name = node_text(capture.node, source_bytes),
                idx if idx == CAPTURE_PROPS_BODY => body = Some(capture.node),
                _ => {}
            }
        }

        match (name, body) {
            (Some(name), Some(body)) if name.contains("Props") => {
                collect_members(body, source_bytes, &mut props);
            }
            _ => {}
        }
    }

    props
}

fn collect_members(body: Node<'_>, source: &[u8], props: &mut Vec<PropInfo>) {
    let mut walker = body.walk();
    for member in body.named_children(&mut walker) {
        let prop_type = match member.kind() {
            "property_signature" => member
                .child_by_field_name("type")
                .map_or(PropType::Unknown, |annotation| classify(annotation, source)),
            "method_signature" => PropType::Unknown,
            _ => continue,
        };
        let Some(name) = member
            .child_by_field_name("name")
            .and_then(|n| node_text(n, source))
        else {
            continue;
        };

        props.push(PropInfo {
            name: unquote(name).to_owned(),
            prop_type,
            required: !is_optional(member),
        });
    }
}

/// Maps a `type_annotation` node to a coarse [`PropType`].
fn classify(annotation: Node<'_>, source: &[u8]) -> PropType {
    let Some(ty) = annotation.named_child(0) else {
        return PropType::Unknown;
    };
    match (ty.kind(), node_text(ty, source)) {
        ("predefined_type", Some("string")) => PropType::String,
        ("predefined_type", Some("number")) => PropType::Number,
        ("predefined_type", Some("boolean")) => PropType::Boolean,
        ("type_identifier", Some(name)) => PropType::Named(name.to_owned()),
        _ => PropType::Unknown,
    }
}

fn is_optional(member: Node<'_>) -> bool {
    let mut walker = member.walk();
    member.children(&mut walker).any(|child| child.kind() == "?")
}
