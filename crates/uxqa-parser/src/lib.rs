//! React component analysis using tree-sitter.
//!
//! This crate turns the text of one TSX/JSX file into a
//! [`ComponentInfo`](uxqa_core::ComponentInfo):
//!
//! - Detect the component name from top-level declarations
//! - Extract interactive elements with their test ids, labels and handlers
//! - Extract declared prop shapes from `*Props` interfaces and type literals
//! - Find route strings (`path="..."`, `to="..."`, `navigate("...")`)
//!
//! # Overview
//!
//! The main entry point is [`ReactAnalyzer`]:
//!
//! ```
//! use camino::Utf8Path;
//! use uxqa_parser::ReactAnalyzer;
//!
//! let mut analyzer = ReactAnalyzer::new()?;
//! let source = r#"
//!     export const Toolbar = () => (
//!         <nav>
//!             <button onClick={save}>Save</button>
//!             <a href="/help">Help</a>
//!         </nav>
//!     );
//! "#;
//!
//! if let Some(component) = analyzer.analyze(Utf8Path::new("Toolbar.tsx"), source)? {
//!     for element in component.elements_missing_test_id() {
//!         println!("line {}: add data-testid=\"{}\"", element.line, element.suggested_test_id);
//!     }
//! }
//! # Ok::<(), uxqa_parser::ParseError>(())
//! ```
//!
//! # Element Detection
//!
//! | Tag | Element type |
//! |-----|--------------|
//! | `button` | `button` |
//! | `a` | `link` |
//! | `input` | `input`, `checkbox` or `radio` by `type` |
//! | `textarea`, `select`, `form` | same name |
//! | `dialog` | `modal` |
//! | `details` | `accordion` |
//! | anything with a recognized handler | `other` |
//!
//! Files without elements and without an `export default` statement are
//! not components and yield `None`.
//!
//! # Thread Safety
//!
//! [`ReactAnalyzer`] is `Send` but not `Sync`. Compiled queries and route
//! patterns are cached process-wide and shared by every analyzer.

mod analyzer;
mod component;
mod element;
mod error;
mod node;
mod props;
pub mod queries;
mod routes;

pub use analyzer::ReactAnalyzer;
pub use element::{extract_elements, EVENT_HANDLERS};
pub use error::ParseError;
pub use props::extract_props;
pub use routes::{extract_routes, ROUTE_PATTERNS};
