//! Identifier naming helpers.
//!
//! Kebab-casing is shared by test-id suggestion, test-file probing and
//! scaffold file naming, so every stage agrees on the same spelling.

/// Converts arbitrary text to kebab-case.
///
/// Inserts a hyphen at each lowercase-or-digit to uppercase boundary, turns
/// whitespace, underscores and hyphens into single hyphens, lowercases, and
/// drops every other character outside `[a-z0-9]`. Leading and trailing
/// hyphens are trimmed.
///
/// # Examples
///
/// ```
/// use uxqa_core::naming::to_kebab_case;
///
/// assert_eq!(to_kebab_case("LoginForm"), "login-form");
/// assert_eq!(to_kebab_case("Sign In!"), "sign-in");
/// assert_eq!(to_kebab_case("user_email  field"), "user-email-field");
/// ```
#[must_use]
pub fn to_kebab_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut prev: Option<char> = None;

    for ch in input.chars() {
        if ch.is_whitespace() || ch == '_' || ch == '-' {
            push_separator(&mut out);
        } else if ch.is_ascii_alphanumeric() {
            if ch.is_ascii_uppercase()
                && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
            {
                push_separator(&mut out);
            }
            out.push(ch.to_ascii_lowercase());
        }
        prev = Some(ch);
    }

    while out.ends_with('-') {
        out.pop();
    }
    out
}

fn push_separator(out: &mut String) {
    if !out.is_empty() && !out.ends_with('-') {
        out.push('-');
    }
}

/// Suffixes that already identify the element kind.
const KIND_SUFFIXES: &[&str] = &["-btn", "-input"];

/// Computes a suggested `data-testid` for an element.
///
/// The base is the first non-blank of `name`, `id`, `label`, falling back to
/// the tag itself. The kebab-cased base gets a `-<tag>` suffix unless it
/// already equals the tag or ends with `-<tag>`, `-btn` or `-input`.
///
/// This is a pure function: identical inputs always give identical output.
///
/// # Examples
///
/// ```
/// use uxqa_core::naming::suggest_test_id;
///
/// assert_eq!(suggest_test_id("button", Some("Sign In"), None, None), "sign-in-button");
/// assert_eq!(suggest_test_id("input", None, Some("email"), None), "email-input");
/// assert_eq!(suggest_test_id("button", None, None, None), "button");
/// ```
#[must_use]
pub fn suggest_test_id(
    tag: &str,
    label: Option<&str>,
    name: Option<&str>,
    id: Option<&str>,
) -> String {
    let tag_slug = match to_kebab_case(tag) {
        slug if slug.is_empty() => "element".to_owned(),
        slug => slug,
    };

    let base = [name, id, label]
        .into_iter()
        .flatten()
        .map(to_kebab_case)
        .find(|slug| !slug.is_empty())
        .unwrap_or_else(|| tag_slug.clone());

    let tag_suffix = format!("-{tag_slug}");
    if base == tag_slug
        || base.ends_with(&tag_suffix)
        || KIND_SUFFIXES.iter().any(|suffix| base.ends_with(suffix))
    {
        base
    } else {
        base + &tag_suffix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case_boundaries() {
        assert_eq!(to_kebab_case("searchInput"), "search-input");
        assert_eq!(to_kebab_case("step2Next"), "step2-next");
        assert_eq!(to_kebab_case("HTMLButton"), "htmlbutton");
        assert_eq!(to_kebab_case("already-kebab"), "already-kebab");
    }

    #[test]
    fn test_kebab_case_strips_and_collapses() {
        assert_eq!(to_kebab_case("  Save & Continue  "), "save-continue");
        assert_eq!(to_kebab_case("a__b--c"), "a-b-c");
        assert_eq!(to_kebab_case("/users/profile"), "usersprofile");
        assert_eq!(to_kebab_case("!!!"), "");
        assert_eq!(to_kebab_case(""), "");
    }

    #[test]
    fn test_suggest_priority() {
        // name beats id beats label
        assert_eq!(
            suggest_test_id("input", Some("Email"), Some("userEmail"), Some("email-field")),
            "user-email-input"
        );
        assert_eq!(
            suggest_test_id("input", Some("Email"), None, Some("remember")),
            "remember-input"
        );
        assert_eq!(
            suggest_test_id("textarea", Some("Your message"), None, None),
            "your-message-textarea"
        );
    }

    #[test]
    fn test_suggest_blank_values_are_skipped() {
        assert_eq!(
            suggest_test_id("button", Some("Close"), Some("   "), Some("")),
            "close-button"
        );
        assert_eq!(suggest_test_id("a", Some("?!"), None, None), "a");
    }

    #[test]
    fn test_suggest_existing_suffixes() {
        assert_eq!(suggest_test_id("button", None, Some("submit_btn"), None), "submit-btn");
        assert_eq!(suggest_test_id("input", None, Some("searchInput"), None), "search-input");
        assert_eq!(suggest_test_id("button", Some("Reset button"), None, None), "reset-button");
        assert_eq!(suggest_test_id("select", None, Some("country"), None), "country-select");
    }

    #[test]
    fn test_suggest_custom_tag() {
        assert_eq!(suggest_test_id("MenuItem", Some("Profile"), None, None), "profile-menu-item");
        assert_eq!(suggest_test_id("MenuItem", None, None, None), "menu-item");
    }

    #[test]
    fn test_suggest_is_deterministic() {
        let first = suggest_test_id("button", Some("Sign In"), None, Some("login"));
        let second = suggest_test_id("button", Some("Sign In"), None, Some("login"));
        assert_eq!(first, second);
        assert_eq!(first, "login-button");
    }
}
