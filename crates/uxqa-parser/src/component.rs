//! Top-level component declaration detection.

use tree_sitter::Node;

use crate::node::node_text;

/// What the top-level statements of a file declare.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Declarations {
    /// Name of the last uppercase function-like declaration.
    pub component_name: Option<String>,
    /// Whether the file has an `export default` statement.
    pub has_default_export: bool,
}

/// Walks the program's top-level statements.
///
/// A `function` declaration, or a `const`/`let`/`var` declarator whose value
/// is an arrow function or function expression, names a component when its
/// identifier starts with an ASCII uppercase letter. Later matches replace
/// earlier ones. Statements wrapped in `export` and `export default` count.
pub(crate) fn scan_declarations(root: Node<'_>, source: &[u8]) -> Declarations {
    let mut declarations = Declarations::default();
    let mut walker = root.walk();

    for statement in root.named_children(&mut walker) {
        if statement.kind() == "export_statement" {
            if is_default_export(statement) {
                declarations.has_default_export = true;
            }
            if let Some(inner) = statement.child_by_field_name("declaration") {
                visit_declaration(inner, source, &mut declarations);
            }
        } else {
            visit_declaration(statement, source, &mut declarations);
        }
    }

    declarations
}

fn is_default_export(statement: Node<'_>) -> bool {
    let mut walker = statement.walk();
    statement
        .children(&mut walker)
        .any(|child| child.kind() == "default")
}

fn visit_declaration(node: Node<'_>, source: &[u8], declarations: &mut Declarations) {
    match node.kind() {
        "function_declaration" => {
            if let Some(name) = node
                .child_by_field_name("name")
                .and_then(|n| node_text(n, source))
            {
                record(name, declarations);
            }
        }
        "lexical_declaration" | "variable_declaration" => {
            let mut walker = node.walk();
            for declarator in node.named_children(&mut walker) {
                if declarator.kind() != "variable_declarator" {
                    continue;
                }
                let is_function = declarator
                    .child_by_field_name("value")
                    .is_some_and(|value| {
                        matches!(
                            value.kind(),
                            "arrow_function" | "function_expression" | "function"
                        )
                    });
                if !is_function {
                    continue;
                }
                if let Some(name) = declarator
                    .child_by_field_name("name")
                    .filter(|n| n.kind() == "identifier")
                    .and_then(|n| node_text(n, source))
                {
                    record(name, declarations);
                }
            }
        }
        _ => {}
    }
}

fn record(name: &str, declarations: &mut Declarations) {
    if name.starts_with(|c: char| c.is_ascii_uppercase()) {
        declarations.component_name = Some(name.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use tree_sitter::Parser;

    use super::*;
    use crate::queries::tsx_language;

    fn scan(source: &str) -> Declarations {
        let mut parser = Parser::new();
        parser.set_language(&tsx_language()).unwrap();
        let tree = parser.parse(source, None).unwrap();
        scan_declarations(tree.root_node(), source.as_bytes())
    }

    #[test]
    fn test_function_declaration() {
        let found = scan("function LoginForm() { return null; }");
        assert_eq!(found.component_name.as_deref(), Some("LoginForm"));
        assert!(!found.has_default_export);
    }

    #[test]
    fn test_exported_arrow_function() {
        let found = scan("export const Header = () => null;");
        assert_eq!(found.component_name.as_deref(), Some("Header"));
    }

    #[test]
    fn test_default_export_function() {
        let found = scan("export default function Page() { return null; }");
        assert_eq!(found.component_name.as_deref(), Some("Page"));
        assert!(found.has_default_export);
    }

    #[test]
    fn test_default_export_identifier() {
        let found = scan("const Card = function () { return null; };\nexport default Card;");
        assert_eq!(found.component_name.as_deref(), Some("Card"));
        assert!(found.has_default_export);
    }

    #[test]
    fn test_last_uppercase_declaration_wins() {
        let found = scan(
            "const Spinner = () => null;\nfunction helper() {}\nexport function Dashboard() { return null; }",
        );
        assert_eq!(found.component_name.as_deref(), Some("Dashboard"));
    }

    #[test]
    fn test_ignores_lowercase_and_non_functions() {
        let found = scan("const useThing = () => 1;\nconst CONFIG = { a: 1 };\nfunction format() {}");
        assert_eq!(found, Declarations::default());
    }
}
