//! Pre-compiled tree-sitter queries for TSX component analysis.
//!
//! This module provides the S-expression patterns for markup elements and
//! prop shapes, plus lazily compiled, globally cached [`Query`] values.

use std::sync::OnceLock;

use tree_sitter::{Language, Query};

use crate::error::ParseError;

/// Tree-sitter query matching every markup element.
///
/// # Capture Names
///
/// - `element` - A `jsx_opening_element` or `jsx_self_closing_element` node
pub const ELEMENT_QUERY: &str = r"
; Opening tag of an element with children: <button ...>
(jsx_opening_element) @element

; Self-closing element: <input ... />
(jsx_self_closing_element) @element
";

/// Capture index for `element`.
pub const CAPTURE_ELEMENT: u32 = 0;

/// Tree-sitter query matching declared prop shapes.
///
/// # Capture Names
///
/// - `props.name` - The interface or type alias name
/// - `props.body` - The interface body or object type literal
pub const PROPS_QUERY: &str = r"
; interface ButtonProps { ... }
(interface_declaration
  name: (type_identifier) @props.name
  body: (_) @props.body)

; type ButtonProps = { ... }
(type_alias_declaration
  name: (type_identifier) @props.name
  value: (object_type) @props.body)
";

/// Capture index for `props.name`.
pub const CAPTURE_PROPS_NAME: u32 = 0;

/// Capture index for `props.body`.
pub const CAPTURE_PROPS_BODY: u32 = 1;

/// Global cache for the compiled element query.
static COMPILED_ELEMENT_QUERY: OnceLock<Query> = OnceLock::new();

/// Global cache for the compiled props query.
static COMPILED_PROPS_QUERY: OnceLock<Query> = OnceLock::new();

/// Returns the TSX language.
#[inline]
pub fn tsx_language() -> Language {
    tree_sitter_typescript::LANGUAGE_TSX.into()
}

/// Returns the compiled element query.
///
/// The query is compiled once and cached for all subsequent calls.
/// This function is thread-safe.
///
/// # Errors
///
/// Returns [`ParseError::QueryCompile`] if the query fails to compile.
pub fn get_element_query() -> Result<&'static Query, ParseError> {
    get_or_compile(&COMPILED_ELEMENT_QUERY, ELEMENT_QUERY)
}

/// Returns the compiled props query.
///
/// # Errors
///
/// Returns [`ParseError::QueryCompile`] if the query fails to compile.
pub fn get_props_query() -> Result<&'static Query, ParseError> {
    get_or_compile(&COMPILED_PROPS_QUERY, PROPS_QUERY)
}

fn get_or_compile(
    cache: &'static OnceLock<Query>,
    source: &str,
) -> Result<&'static Query, ParseError> {
    if let Some(query) = cache.get() {
        return Ok(query);
    }

    let query = compile_query(&tsx_language(), source)?;
    Ok(cache.get_or_init(|| query))
}

/// Compiles a query for the given language.
fn compile_query(language: &Language, source: &str) -> Result<Query, ParseError> {
    Query::new(language, source).map_err(|e| ParseError::QueryCompile {
        offset: e.offset,
        kind: e,
    })
}
