//! End-to-end scans over temporary component trees.

#![allow(clippy::unwrap_used)]

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;
use uxqa_core::{ElementType, Framework, ScannerConfig};
use uxqa_scanner::Scanner;

struct Fixture {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap().join("src");
        fs::create_dir_all(&root).unwrap();
        Self { _dir: dir, root }
    }

    fn write(&self, relative: &str, contents: &str) -> &Self {
        let path = self.root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
        self
    }

    fn config(&self) -> ScannerConfig {
        let mut config = ScannerConfig::with_root(self.root.clone());
        config.out_dir = self.root.join("../e2e/generated");
        config
    }
}

const LOGIN_FORM: &str = r#"
export function LoginForm() {
    return (
        <form onSubmit={submit}>
            <input type="email" name="email" data-testid="login-email" />
            <input type="checkbox" name="remember" />
            <button onClick={handleLogin}>Sign In</button>
            <Link to="/forgot">Forgot password?</Link>
        </form>
    );
}
"#;

const NAV: &str = r#"
export default function Nav() {
    return (
        <nav>
            <a href="/home" data-testid="nav-home">Home</a>
            <Link to="/forgot">Reset</Link>
        </nav>
    );
}
"#;

#[test]
fn scan_reports_components_and_coverage() {
    let fixture = Fixture::new();
    fixture
        .write("auth/LoginForm.tsx", LOGIN_FORM)
        .write("auth/LoginForm.test.tsx", "test('x', () => {});")
        .write("layout/Nav.jsx", NAV)
        .write("utils/format.tsx", "export const pad = (s: string) => s.padStart(2, '0');");

    let result = Scanner::new(fixture.config()).scan().unwrap();

    let names: Vec<_> = result.components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["LoginForm", "Nav"]);

    let login = &result.components[0];
    assert_eq!(login.path, Utf8PathBuf::from("auth/LoginForm.tsx"));
    assert!(login.has_tests);
    assert_eq!(
        login.test_file_path.as_deref(),
        Some(Utf8Path::new("auth/LoginForm.test.tsx"))
    );
    let button = login
        .elements
        .iter()
        .find(|e| e.element_type == ElementType::Button)
        .unwrap();
    assert_eq!(button.suggested_test_id, "sign-in-button");
    assert!(login
        .elements
        .iter()
        .any(|e| e.element_type == ElementType::Checkbox));

    let coverage = result.coverage;
    assert_eq!(coverage.total_components, 2);
    assert_eq!(coverage.tested_components, 1);
    assert_eq!(coverage.component_percent(), 50);
    assert_eq!(coverage.total_elements, 5);
    assert_eq!(coverage.elements_with_test_id, 2);
    assert_eq!(coverage.total_routes, 1);
    assert_eq!(coverage.tested_routes, 1);

    assert_eq!(result.routes.len(), 1);
    assert_eq!(result.routes[0].component, "LoginForm");
    assert!(result.warnings.is_empty());
}

#[test]
fn scan_of_utilities_only_is_empty() {
    let fixture = Fixture::new();
    fixture
        .write("hooks/useToggle.tsx", "export function useToggle() { return [true, () => {}]; }")
        .write("constants.tsx", "export const LIMIT = 10;");

    let result = Scanner::new(fixture.config()).scan().unwrap();

    assert!(result.components.is_empty());
    assert_eq!(result.coverage.total_components, 0);
    assert_eq!(result.coverage.component_percent(), 0);
    assert_eq!(result.stats.non_components, 2);
}

#[test]
fn scan_excludes_tests_and_stories_by_default() {
    let fixture = Fixture::new();
    fixture
        .write("Card.tsx", "export const Card = () => <button>Open</button>;")
        .write("Card.stories.tsx", "export const Story = () => <button>Story</button>;")
        .write("Card.spec.tsx", "export const Spec = () => <button>Spec</button>;");

    let result = Scanner::new(fixture.config()).scan().unwrap();
    assert_eq!(result.components.len(), 1);
    assert!(result.components[0].has_tests);
}

#[test]
fn scan_finds_generated_spec_in_out_dir() {
    let fixture = Fixture::new();
    fixture.write("Header.tsx", "export const Header = () => <a href=\"/\">Home</a>;");
    let config = fixture.config();
    fs::create_dir_all(&config.out_dir).unwrap();
    fs::write(config.out_dir.join("header.spec.ts"), "").unwrap();

    let result = Scanner::new(config).scan().unwrap();
    assert!(result.components[0].has_tests);
}

#[test]
fn scan_records_warnings_and_continues() {
    let fixture = Fixture::new();
    fixture
        .write("Broken.tsx", "export const Broken = () => (<div><button>")
        .write("Good.tsx", "export const Good = () => <button>Ok</button>;");

    let result = Scanner::new(fixture.config()).scan().unwrap();

    assert_eq!(result.components.len(), 1);
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].starts_with("Broken.tsx: syntax error"));
}

#[test]
fn scan_warnings_name_failing_files_relative_to_root() {
    let fixture = Fixture::new();
    fixture
        .write("settings/Panel.tsx", "export const Panel = () => (<section><a>")
        .write("auth/Login.tsx", "export const Login = () => <button>")
        .write("Home.tsx", "export const Home = () => <a href=\"/\">Home</a>;");

    let result = Scanner::new(fixture.config()).scan().unwrap();

    let files: Vec<&str> = result
        .warnings
        .iter()
        .map(|warning| warning.split(": ").next().unwrap())
        .collect();
    assert_eq!(files, ["auth/Login.tsx", "settings/Panel.tsx"]);
    assert_eq!(result.stats.failures, 2);
    assert_eq!(result.stats.without_component(), 2);
}

#[test]
fn scan_warns_about_unsupported_frameworks() {
    let fixture = Fixture::new();
    fixture.write("Widget.tsx", "export const Widget = () => <button>Go</button>;");

    let mut config = fixture.config();
    config.framework = Framework::Vue;
    let result = Scanner::new(config).scan().unwrap();

    assert!(result.components.is_empty());
    assert_eq!(
        result.warnings,
        ["Widget.tsx: no analyzer available for vue files"]
    );
}

#[test]
fn scan_result_serializes_camel_case() {
    let fixture = Fixture::new();
    fixture.write("Save.tsx", "export const Save = () => <button>Save</button>;");

    let result = Scanner::new(fixture.config()).scan().unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["coverage"]["totalComponents"], 1);
    assert_eq!(json["components"][0]["hasTests"], false);
    assert_eq!(
        json["components"][0]["elements"][0]["suggestedTestId"],
        "save-button"
    );
}
