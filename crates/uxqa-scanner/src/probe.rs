//! Test file discovery for components.

use camino::{Utf8Path, Utf8PathBuf};
use uxqa_core::naming::to_kebab_case;

/// Suffixes probed next to a component and in its `__tests__` directory.
const TEST_SUFFIXES: [&str; 4] = [".test.ts", ".test.tsx", ".spec.ts", ".spec.tsx"];

/// Name of the conventional co-located test directory.
const TESTS_DIR: &str = "__tests__";

/// Lists candidate test files for a component, in probing order.
///
/// For `src/auth/LoginForm.tsx` named `LoginForm` with test directory
/// `e2e/generated`:
///
/// 1. `src/auth/LoginForm.test.ts`, `.test.tsx`, `.spec.ts`, `.spec.tsx`
/// 2. the same four under `src/auth/__tests__/`
/// 3. `e2e/generated/login-form.spec.ts`
#[must_use]
pub fn test_file_candidates(
    component_path: &Utf8Path,
    component_name: &str,
    test_dir: &Utf8Path,
) -> Vec<Utf8PathBuf> {
    let dir = component_path.parent().unwrap_or_else(|| Utf8Path::new(""));
    let stem = component_path.file_stem().unwrap_or(component_name);

    let mut candidates = Vec::with_capacity(TEST_SUFFIXES.len() * 2 + 1);
    for base in [dir.to_owned(), dir.join(TESTS_DIR)] {
        candidates.extend(
            TEST_SUFFIXES
                .iter()
                .map(|suffix| base.join(format!("{stem}{suffix}"))),
        );
    }
    candidates.push(test_dir.join(format!("{}.spec.ts", to_kebab_case(component_name))));
    candidates
}

/// Returns the first existing test file for a component.
#[must_use]
pub fn find_test_file(
    component_path: &Utf8Path,
    component_name: &str,
    test_dir: &Utf8Path,
) -> Option<Utf8PathBuf> {
    test_file_candidates(component_path, component_name, test_dir)
        .into_iter()
        .find(|candidate| candidate.is_file())
}
