//! Playwright scaffold generation for untested components.
//!
//! Each component becomes one `<kebab-name>.spec.ts` file with a
//! `test.describe` block. Which cases are emitted is controlled by
//! [`GenerateOptions`]:
//!
//! | Option | Cases |
//! |--------|-------|
//! | `include_visibility` | one per element with a test id |
//! | `include_interactions` | click per button, and per link with a handler |
//! | `include_navigation` | one per link with an `href` |
//! | `include_forms` | check/uncheck per checkbox, submit per form |
//!
//! `include_a11y` adds assertions to those cases and `add_todos` adds
//! `TODO` comments; neither adds cases.

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use uxqa_core::naming::to_kebab_case;
use uxqa_core::{fx_hash_set_with_capacity, ComponentInfo, ElementInfo, ElementType, FxHashSet, GenerateOptions};
use uxqa_scanner::ScanResult;

/// File name used when a component name has no usable characters.
const FALLBACK_FILE_STEM: &str = "component";

/// A generated test file, not yet written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedTest {
    /// Destination path (`<out_dir>/<kebab-name>.spec.ts`).
    pub file_path: Utf8PathBuf,
    /// Full file content.
    pub content: String,
    /// Name of the component the scaffold covers.
    pub component_name: String,
    /// Number of `test(...)` cases in the file.
    pub test_count: usize,
}

/// Generates a scaffold test file for one component.
///
/// # Examples
///
/// ```
/// use camino::{Utf8Path, Utf8PathBuf};
/// use uxqa_core::{ComponentInfo, Framework, GenerateOptions};
/// use uxqa_report::generate_test_file;
///
/// let component = ComponentInfo::new(Utf8PathBuf::from("UserMenu.tsx"), "UserMenu", Framework::React);
/// let generated = generate_test_file(
///     &component,
///     &GenerateOptions::default(),
///     "http://localhost:3000",
///     Utf8Path::new("e2e/generated"),
/// );
///
/// assert_eq!(generated.file_path.as_str(), "e2e/generated/user-menu.spec.ts");
/// assert_eq!(generated.test_count, 0);
/// ```
#[must_use]
pub fn generate_test_file(
    component: &ComponentInfo,
    options: &GenerateOptions,
    base_url: &str,
    out_dir: &Utf8Path,
) -> GeneratedTest {
    let mut suite = Suite::new(options, component.elements.len());
    for element in &component.elements {
        suite.add_element_cases(element);
    }

    GeneratedTest {
        file_path: out_dir.join(format!("{}.spec.ts", file_stem(&component.name))),
        test_count: suite.cases.len(),
        content: suite.render(component, base_url),
        component_name: component.name.clone(),
    }
}

/// Generates scaffolds for every component without tests.
#[must_use]
pub fn generate_tests(
    result: &ScanResult,
    options: &GenerateOptions,
    base_url: &str,
    out_dir: &Utf8Path,
) -> Vec<GeneratedTest> {
    result
        .components
        .iter()
        .filter(|c| !c.has_tests)
        .map(|c| generate_test_file(c, options, base_url, out_dir))
        .collect()
}

fn file_stem(component_name: &str) -> String {
    match to_kebab_case(component_name) {
        stem if stem.is_empty() => FALLBACK_FILE_STEM.to_owned(),
        stem => stem,
    }
}

/// One `test(...)` case.
#[derive(Debug)]
struct Case {
    title: String,
    body: Vec<String>,
}

/// Cases collected for one component.
#[derive(Debug)]
struct Suite<'o> {
    options: &'o GenerateOptions,
    cases: Vec<Case>,
    titles: FxHashSet<String>,
}

impl<'o> Suite<'o> {
    fn new(options: &'o GenerateOptions, elements: usize) -> Self {
        Self {
            options,
            cases: Vec::new(),
            titles: fx_hash_set_with_capacity(elements),
        }
    }

    fn add_element_cases(&mut self, element: &ElementInfo) {
        let options = self.options;
        let what = describe(element);

        if options.include_visibility && element.has_test_id() {
            let mut body = locate(element);
            body.push("await expect(element).toBeVisible();".to_owned());
            body.extend(self.a11y_assertions(element));
            self.push(element, format!("shows {what}"), body);
        }

        let clickable = element.element_type == ElementType::Button
            || (element.element_type == ElementType::Link && element.has_handlers());
        if options.include_interactions && clickable {
            let mut body = locate(element);
            body.extend(self.a11y_assertions(element));
            body.push("await element.click();".to_owned());
            if options.add_todos {
                body.push(format!("// TODO: assert the result of clicking {what}"));
            }
            self.push(element, format!("clicks {what}"), body);
        }

        if let (true, ElementType::Link, Some(href)) = (
            options.include_navigation,
            element.element_type,
            element.href.as_deref(),
        ) {
            let mut body = locate(element);
            body.push("await element.click();".to_owned());
            body.push(format!("await expect(page).toHaveURL({});", url_matcher(href)));
            self.push(element, format!("navigates via {what}"), body);
        }

        if options.include_forms && element.element_type == ElementType::Checkbox {
            let mut body = locate(element);
            body.extend(self.a11y_assertions(element));
            body.push("await element.check();".to_owned());
            body.push("await expect(element).toBeChecked();".to_owned());
            body.push("await element.uncheck();".to_owned());
            body.push("await expect(element).not.toBeChecked();".to_owned());
            self.push(element, format!("toggles {what}"), body);
        }

        if options.include_forms && element.element_type == ElementType::Form {
            let mut body = locate(element);
            if options.add_todos {
                body.push("// TODO: fill in the form fields".to_owned());
            }
            body.push("await element.locator('[type=\"submit\"]').click();".to_owned());
            if options.add_todos {
                body.push(format!("// TODO: assert the result of submitting {what}"));
            }
            self.push(element, format!("submits {what}"), body);
        }
    }

    fn a11y_assertions(&self, element: &ElementInfo) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.options.include_a11y {
            return lines;
        }
        if element.element_type == ElementType::Button {
            lines.push("await expect(element).toBeEnabled();".to_owned());
        }
        if let Some(label) = &element.label {
            lines.push(format!(
                "await expect(element).toHaveAccessibleName({});",
                js_string(label)
            ));
        }
        lines
    }

    /// Adds a case, making the title unique within the suite.
    fn push(&mut self, element: &ElementInfo, title: String, body: Vec<String>) {
        let title = if self.titles.contains(&title) {
            format!("{title} (line {})", element.line)
        } else {
            title
        };
        self.titles.insert(title.clone());
        self.cases.push(Case { title, body });
    }

    fn render(&self, component: &ComponentInfo, base_url: &str) -> String {
        let route = component.routes.first().map_or("/", String::as_str);

        let mut lines: Vec<String> = vec![
            "import { test, expect } from '@playwright/test';".to_owned(),
            String::new(),
            format!(
                "// Scaffold for {} ({}), generated by uxqa-scanner.",
                component.name, component.path
            ),
            String::new(),
            format!("test.describe({}, () => {{", js_string(&component.name)),
            "  test.beforeEach(async ({ page }) => {".to_owned(),
        ];
        if self.options.add_todos && route.contains(':') {
            lines.push(format!("    // TODO: replace the parameters in {route}"));
        }
        lines.push(format!(
            "    await page.goto({});",
            js_string(&join_url(base_url, route))
        ));
        lines.push("  });".to_owned());

        if self.cases.is_empty() && self.options.add_todos {
            lines.push(String::new());
            lines.push(format!("  // TODO: add tests for {}", component.name));
        }

        for case in &self.cases {
            lines.push(String::new());
            lines.push(format!(
                "  test({}, async ({{ page }}) => {{",
                js_string(&case.title)
            ));
            lines.extend(case.body.iter().map(|line| format!("    {line}")));
            lines.push("  });".to_owned());
        }

        lines.push("});".to_owned());

        let mut content = lines.join("\n");
        content.push('\n');
        content
    }
}

/// Short human description of an element for case titles.
fn describe(element: &ElementInfo) -> String {
    match (&element.label, &element.test_id) {
        (Some(label), _) => format!("{} \"{label}\"", element.element_type),
        (None, Some(test_id)) => format!("{} {test_id}", element.element_type),
        (None, None) => format!("{} {}", element.element_type, element.suggested_test_id),
    }
}

/// Lines that bind `element` to a locator for this element.
fn locate(element: &ElementInfo) -> Vec<String> {
    let mut lines = Vec::with_capacity(2);
    let locator = match &element.test_id {
        Some(test_id) => format!("page.getByTestId({})", js_string(test_id)),
        None => {
            lines.push(format!(
                "// No data-testid yet: add data-testid=\"{}\" to this <{}> (line {})",
                element.suggested_test_id, element.tag, element.line
            ));
            format!("page.locator({})", js_string(&fallback_selector(element)))
        }
    };
    lines.push(format!("const element = {locator};"));
    lines
}

/// CSS selector for an element without a test id.
fn fallback_selector(element: &ElementInfo) -> String {
    if let Some(name) = &element.name {
        return format!("{}[name=\"{}\"]", element.tag, css_escape(name));
    }
    match (&element.label, element.element_type) {
        (Some(label), ElementType::Button | ElementType::Link) => {
            format!("{}:has-text(\"{}\")", element.tag, css_escape(label))
        }
        _ => format!("{} >> nth=0", element.tag),
    }
}

/// Joins a base URL and a route with exactly one slash between them.
fn join_url(base_url: &str, route: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        route.trim_start_matches('/')
    )
}

/// URL assertion argument for a link target.
fn url_matcher(href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        js_string(href)
    } else {
        // Relative targets are matched as a suffix of the final URL
        format!("new RegExp({} + '$')", js_string(&regex_escape(href)))
    }
}

fn regex_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if "\\^$.|?*+()[]{}/".contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn css_escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Renders text as a single-quoted JavaScript string literal.
fn js_string(text: &str) -> String {
    let mut literal = String::with_capacity(text.len() + 2);
    literal.push('\'');
    for c in text.chars() {
        match c {
            '\\' => literal.push_str("\\\\"),
            '\'' => literal.push_str("\\'"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            c => literal.push(c),
        }
    }
    literal.push('\'');
    literal
}
