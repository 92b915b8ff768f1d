//! Small helpers for reading text and positions out of syntax nodes.

use tree_sitter::Node;

/// Extracts text from a node.
pub(crate) fn node_text<'a>(node: Node<'_>, source: &'a [u8]) -> Option<&'a str> {
    let start = node.start_byte();
    let end = node.end_byte();
    std::str::from_utf8(source.get(start..end)?).ok()
}

/// Returns the node's starting line (1-indexed).
///
/// # Note
///
/// The cast from `usize` to `u32` is safe because source files are
/// limited to 4GB, which fits in `u32`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn node_line(node: Node<'_>) -> u32 {
    node.start_position().row as u32 + 1
}

/// Returns the node's starting column (0-indexed).
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn node_column(node: Node<'_>) -> u32 {
    node.start_position().column as u32
}

/// Reads the statically known value of a markup attribute.
///
/// Accepts `"text"`, `{"text"}` and the leading static chunk of a template
/// literal (`` {`item-${id}`} `` yields `item-`). Anything dynamic yields
/// `None`, and so does an empty literal or empty leading chunk.
pub(crate) fn static_attribute_value(value: Node<'_>, source: &[u8]) -> Option<String> {
    match value.kind() {
        "string" => node_text(value, source).and_then(string_literal),
        "jsx_expression" => {
            let inner = value.named_child(0)?;
            match inner.kind() {
                "string" => node_text(inner, source).and_then(string_literal),
                "template_string" => node_text(inner, source)
                    .and_then(leading_template_chunk)
                    .map(str::to_owned),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Strips one pair of matching surrounding quotes.
pub(crate) fn unquote(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && matches!(first, b'"' | b'\'' | b'`') {
            return &text[1..text.len() - 1];
        }
    }
    text
}

fn string_literal(text: &str) -> Option<String> {
    let value = unquote(text);
    (!value.is_empty()).then(|| value.to_owned())
}

/// Returns the static text before the first `${` of a template literal.
fn leading_template_chunk(text: &str) -> Option<&str> {
    let body = text.strip_prefix('`')?;
    let end = body
        .find("${")
        .or_else(|| body.rfind('`'))
        .unwrap_or(body.len());
    let chunk = &body[..end];
    (!chunk.is_empty()).then_some(chunk)
}

/// Collapses runs of whitespace into single spaces and trims the ends.
pub(crate) fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decodes HTML character references in markup text.
///
/// Handles the named references `&amp;`, `&lt;`, `&gt;`, `&quot;`, `&apos;`
/// and `&nbsp;` plus decimal and hex numeric references. Anything else is
/// left as written.
pub(crate) fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let decoded = tail
            .find(';')
            .and_then(|end| decode_entity(&tail[1..end]).map(|ch| (ch, end)));
        match decoded {
            Some((ch, end)) => {
                out.push(ch);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let number = name.strip_prefix('#')?;
            let code = match number.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unquote() {
        assert_eq!(unquote(r#""submit""#), "submit");
        assert_eq!(unquote("'x'"), "x");
        assert_eq!(unquote(r#""""#), "");
        assert_eq!(unquote("bare"), "bare");
        assert_eq!(unquote(r#""mismatched'"#), r#""mismatched'"#);
    }

    #[test]
    fn test_leading_template_chunk() {
        assert_eq!(leading_template_chunk("`item-${id}`"), Some("item-"));
        assert_eq!(leading_template_chunk("`static`"), Some("static"));
        assert_eq!(leading_template_chunk("`${id}-row`"), None);
        assert_eq!(leading_template_chunk("``"), None);
        assert_eq!(leading_template_chunk("plain"), None);
    }

    #[test]
    fn test_string_literal_rejects_empty() {
        assert_eq!(string_literal(r#""save""#).as_deref(), Some("save"));
        assert_eq!(string_literal(r#""""#), None);
        assert_eq!(string_literal("''"), None);
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("a &gt; b"), "a > b");
        assert_eq!(decode_entities("Save&nbsp;now"), "Save\u{a0}now");
        assert_eq!(decode_entities("&lt;&amp;&quot;&#39;&#x41;"), "<&\"'A");
        assert_eq!(decode_entities("Tom & Jerry; &bogus;"), "Tom & Jerry; &bogus;");
        assert_eq!(decode_entities("no refs"), "no refs");
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("\n   Sign\n   In  "), "Sign In");
        assert_eq!(normalize_whitespace("   "), "");
        assert_eq!(normalize_whitespace("Save\u{a0}now"), "Save now");
    }
}
