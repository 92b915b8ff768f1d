//! Route string detection over raw source text.
//!
//! Routes are found with three regular expressions rather than through the
//! syntax tree, so declarations inside comments are picked up as well.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ParseError;

/// Patterns recognizing route strings, applied in this order.
///
/// - `path="..."` (router `<Route>` declarations)
/// - `to="..."` (`<Link>`/`<NavLink>` targets)
/// - `navigate('...')` or `navigate("...")`
pub const ROUTE_PATTERNS: [&str; 3] = [
    r#"\bpath="([^"]+)""#,
    r#"\bto="([^"]+)""#,
    r#"\bnavigate\(\s*['"]([^'"]+)['"]"#,
];

static COMPILED_ROUTE_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

fn route_patterns() -> Result<&'static [Regex], ParseError> {
    if let Some(patterns) = COMPILED_ROUTE_PATTERNS.get() {
        return Ok(patterns);
    }

    let patterns = ROUTE_PATTERNS
        .iter()
        .map(|pattern| Regex::new(pattern))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(COMPILED_ROUTE_PATTERNS.get_or_init(|| patterns))
}

/// Extracts route strings from source text.
///
/// Each pattern's matches are collected in source order, pattern by
/// pattern; repeated routes keep their first position.
///
/// # Errors
///
/// Returns [`ParseError::Pattern`] if a route pattern fails to compile.
///
/// # Examples
///
/// ```
/// use uxqa_parser::extract_routes;
///
/// let source = r#"<Route path="/login" /> <Link to="/help" /> navigate('/login')"#;
/// assert_eq!(extract_routes(source)?, vec!["/login", "/help"]);
/// # Ok::<(), uxqa_parser::ParseError>(())
/// ```
pub fn extract_routes(source: &str) -> Result<Vec<String>, ParseError> {
    let mut routes: Vec<String> = Vec::new();

    for pattern in route_patterns()? {
        for captures in pattern.captures_iter(source) {
            let Some(route) = captures.get(1).map(|m| m.as_str()) else {
                continue;
            };
            if !routes.iter().any(|known| known == route) {
                routes.push(route.to_owned());
            }
        }
    }

    Ok(routes)
}
