//! Error types for the uxqa-parser crate.
//!
//! This module provides the [`ParseError`] type for errors that can occur
//! while parsing a component file and extracting its elements.

/// Errors that can occur during component analysis.
///
/// # Examples
///
/// ```
/// use uxqa_parser::ParseError;
///
/// fn describe(err: &ParseError) -> String {
///     match err {
///         ParseError::Syntax { line, column } => format!("syntax error at {line}:{column}"),
///         other => other.to_string(),
///     }
/// }
///
/// assert_eq!(describe(&ParseError::Syntax { line: 3, column: 7 }), "syntax error at 3:7");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to set the TSX language on the parser.
    #[error("failed to set TSX language")]
    LanguageInit,

    /// Failed to compile a tree-sitter query.
    ///
    /// Contains the byte offset where the error occurred and the error kind.
    #[error("failed to compile query at offset {offset}: {kind:?}")]
    QueryCompile {
        /// The byte offset in the query string where the error occurred.
        offset: usize,
        /// The kind of query error.
        kind: tree_sitter::QueryError,
    },

    /// Failed to compile a route pattern.
    #[error("failed to compile route pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The parser produced no tree.
    ///
    /// This typically indicates the parser ran out of memory or was cancelled.
    #[error("failed to parse source code")]
    Parse,

    /// The source contains malformed syntax.
    #[error("syntax error at line {line}, column {column}")]
    Syntax {
        /// Line of the first error node (1-indexed).
        line: u32,
        /// Column of the first error node (0-indexed).
        column: u32,
    },
}
