//! React component analysis using tree-sitter.
//!
//! This module provides the [`ReactAnalyzer`] struct, which turns the text
//! of a single TSX/JSX file into a [`ComponentInfo`].

use camino::{Utf8Path, Utf8PathBuf};
use tree_sitter::{Node, Parser, Tree};
use uxqa_core::{ComponentInfo, Framework};

use crate::component::scan_declarations;
use crate::element::extract_elements;
use crate::error::ParseError;
use crate::node::{node_column, node_line};
use crate::props::extract_props;
use crate::queries::{get_element_query, get_props_query, tsx_language};
use crate::routes::extract_routes;

/// Analyzer for React component files.
///
/// Wraps a tree-sitter parser configured for TSX, which also accepts plain
/// JSX. The analyzer can be reused for multiple files to avoid repeated
/// initialization.
///
/// # Thread Safety
///
/// `ReactAnalyzer` is `Send` but not `Sync`. For parallel scanning with
/// rayon, create one analyzer per worker thread (for example with
/// `map_init`).
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use uxqa_parser::ReactAnalyzer;
///
/// let mut analyzer = ReactAnalyzer::new()?;
/// let source = r#"
///     export function LoginForm() {
///         return <button data-testid="login-submit">Log in</button>;
///     }
/// "#;
///
/// let component = analyzer
///     .analyze(Utf8Path::new("src/LoginForm.tsx"), source)?
///     .expect("file declares a component");
/// assert_eq!(component.name, "LoginForm");
/// assert_eq!(component.elements_with_test_id(), 1);
/// # Ok::<(), uxqa_parser::ParseError>(())
/// ```
pub struct ReactAnalyzer {
    parser: Parser,
}

impl ReactAnalyzer {
    /// Creates a new analyzer.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::LanguageInit`] if the TSX language fails to load.
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tsx_language())
            .map_err(|_| ParseError::LanguageInit)?;

        Ok(Self { parser })
    }

    /// Parses source text, rejecting trees that contain syntax errors.
    ///
    /// # Errors
    ///
    /// - Returns [`ParseError::Parse`] if the parser produced no tree
    /// - Returns [`ParseError::Syntax`] with the location of the first
    ///   error or missing node
    pub fn parse(&mut self, source: &str) -> Result<Tree, ParseError> {
        let tree = self.parser.parse(source, None).ok_or(ParseError::Parse)?;

        if let Some(node) = first_error(tree.root_node()) {
            return Err(ParseError::Syntax {
                line: node_line(node),
                column: node_column(node),
            });
        }

        Ok(tree)
    }

    /// Analyzes one component file.
    ///
    /// Returns `Ok(None)` when the file contains no interactive elements and
    /// no `export default` statement (utility modules, hooks, constants).
    /// When no uppercase function-like declaration is found, the component
    /// is named after the file stem.
    ///
    /// The returned component carries `path` as given, `has_tests = false`
    /// and no test file; test probing is the scanner's job.
    ///
    /// # Errors
    ///
    /// - Returns [`ParseError::Parse`] or [`ParseError::Syntax`] if the source
    ///   cannot be parsed cleanly
    /// - Returns [`ParseError::QueryCompile`] or [`ParseError::Pattern`] if
    ///   a query or route pattern fails to compile
    pub fn analyze(
        &mut self,
        path: &Utf8Path,
        source: &str,
    ) -> Result<Option<ComponentInfo>, ParseError> {
        let tree = self.parse(source)?;
        let declarations = scan_declarations(tree.root_node(), source.as_bytes());
        let elements = extract_elements(&tree, source, get_element_query()?);

        if elements.is_empty() && !declarations.has_default_export {
            return Ok(None);
        }

        let name = declarations
            .component_name
            .or_else(|| path.file_stem().map(str::to_owned))
            .unwrap_or_else(|| path.as_str().to_owned());

        let mut component = ComponentInfo::new(Utf8PathBuf::from(path), name, Framework::React);
        component.elements = elements;
        component.props = extract_props(&tree, source, get_props_query()?);
        component.routes = extract_routes(source)?;

        Ok(Some(component))
    }
}

impl std::fmt::Debug for ReactAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReactAnalyzer")
            .field("language", &"tsx")
            .finish_non_exhaustive()
    }
}

/// Finds the first error or missing node in document order.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut walker = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut walker).collect();
    children.into_iter().find_map(first_error)
}
