//! Coverage aggregation across analyzed components.

use uxqa_core::{fx_hash_map_with_capacity, ComponentInfo, CoverageStats, RouteInfo};

/// Combines per-component routes into distinct [`RouteInfo`]s.
///
/// Routes keep the order in which they are first seen. The first component
/// exposing a route owns it; `has_tests` is set when any exposing
/// component has tests.
#[must_use]
pub fn collect_routes(components: &[ComponentInfo]) -> Vec<RouteInfo> {
    let mut index = fx_hash_map_with_capacity::<&str, usize>(components.len());
    let mut routes: Vec<RouteInfo> = Vec::new();

    for component in components {
        for path in &component.routes {
            match index.get(path.as_str()) {
                Some(&position) => routes[position].has_tests |= component.has_tests,
                None => {
                    index.insert(path.as_str(), routes.len());
                    routes.push(RouteInfo {
                        path: path.clone(),
                        component: component.name.clone(),
                        has_tests: component.has_tests,
                    });
                }
            }
        }
    }

    routes
}

/// Counts coverage over a set of components.
///
/// Pure: the result depends only on the components passed in.
///
/// # Examples
///
/// ```
/// use camino::Utf8PathBuf;
/// use uxqa_core::{ComponentInfo, Framework};
/// use uxqa_scanner::calculate_coverage;
///
/// let mut tested = ComponentInfo::new(Utf8PathBuf::from("A.tsx"), "A", Framework::React);
/// tested.has_tests = true;
/// let untested = ComponentInfo::new(Utf8PathBuf::from("B.tsx"), "B", Framework::React);
///
/// let stats = calculate_coverage(&[tested, untested]);
/// assert_eq!(stats.component_percent(), 50);
/// ```
#[must_use]
pub fn calculate_coverage(components: &[ComponentInfo]) -> CoverageStats {
    let routes = collect_routes(components);

    CoverageStats {
        total_components: components.len(),
        tested_components: components.iter().filter(|c| c.has_tests).count(),
        total_elements: components.iter().map(ComponentInfo::element_count).sum(),
        elements_with_test_id: components
            .iter()
            .map(ComponentInfo::elements_with_test_id)
            .sum(),
        total_routes: routes.len(),
        tested_routes: routes.iter().filter(|r| r.has_tests).count(),
    }
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;
    use uxqa_core::{ElementInfo, ElementType, Framework};

    use super::*;

    fn component(name: &str, has_tests: bool, routes: &[&str]) -> ComponentInfo {
        let mut component =
            ComponentInfo::new(Utf8PathBuf::from(format!("{name}.tsx")), name, Framework::React);
        component.has_tests = has_tests;
        component.routes = routes.iter().map(|r| (*r).to_owned()).collect();
        component
    }

    #[test]
    fn test_empty_input_is_zero() {
        let stats = calculate_coverage(&[]);
        assert_eq!(stats, CoverageStats::default());
        assert_eq!(stats.component_percent(), 0);
        assert_eq!(stats.test_id_percent(), 0);
        assert_eq!(stats.route_percent(), 0);
    }

    #[test]
    fn test_routes_counted_once() {
        let components = [
            component("Nav", false, &["/home", "/about"]),
            component("Footer", true, &["/about", "/contact"]),
        ];
        let stats = calculate_coverage(&components);
        assert_eq!(stats.total_routes, 3);
        assert_eq!(stats.tested_routes, 2);

        let routes = collect_routes(&components);
        let about = routes.iter().find(|r| r.path == "/about").unwrap();
        assert_eq!(about.component, "Nav");
        assert!(about.has_tests);
    }

    #[test]
    fn test_element_counts() {
        let mut form = component("Form", true, &[]);
        let mut tagged = ElementInfo::new(ElementType::Input, "input", "email-input", 2);
        tagged.test_id = Some("email".to_owned());
        form.elements.push(tagged);
        form.elements
            .push(ElementInfo::new(ElementType::Button, "button", "submit-button", 3));

        let stats = calculate_coverage(&[form, component("Empty", false, &[])]);
        assert_eq!(stats.total_components, 2);
        assert_eq!(stats.tested_components, 1);
        assert_eq!(stats.total_elements, 2);
        assert_eq!(stats.elements_with_test_id, 1);
        assert_eq!(stats.test_id_percent(), 50);
    }
}
