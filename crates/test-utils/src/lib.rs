//! Passform test utilities.
//!
//! Helpers for integration testing: password fixtures, and assertion
//! utilities for rendered form markup and JSON snapshots.

/// A password/confirmation pair and the rule it is expected to trip.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub password: &'static str,
    pub confirmation: &'static str,
    /// Machine name of the failing rule, or `None` when the pair is valid.
    pub expected_rule: Option<&'static str>,
    pub expected_message: &'static str,
}

/// One scenario per rule, plus the valid case, in rule order.
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            password: "abc",
            confirmation: "abc",
            expected_rule: Some("min_length"),
            expected_message: "Password must be at least 6 characters",
        },
        Scenario {
            password: "abc123",
            confirmation: "abc123",
            expected_rule: Some("has_uppercase"),
            expected_message: "Password must contain at least one uppercase letter",
        },
        Scenario {
            password: "ABC123",
            confirmation: "ABC123",
            expected_rule: Some("has_lowercase"),
            expected_message: "Password must contain at least one lowercase letter",
        },
        Scenario {
            password: "abcABC",
            confirmation: "abcABC",
            expected_rule: Some("has_digit"),
            expected_message: "Password must contain at least one number",
        },
        Scenario {
            password: "abcABC123",
            confirmation: "abcABC123",
            expected_rule: Some("has_special_char"),
            expected_message: "Password must contain at least one special character (!@#$%^&*()_-+={[}]|:;\"'<,>.)",
        },
        Scenario {
            password: "abcABC123$%",
            confirmation: "abcABC123$",
            expected_rule: Some("confirmation_mismatch"),
            expected_message: "Password does not match confirmation",
        },
        Scenario {
            password: "abcABC123$%",
            confirmation: "abcABC123$%",
            expected_rule: None,
            expected_message: "Password is valid",
        },
    ]
}

/// Build a JSON-lines action script from `(action, value)` pairs.
pub fn script(steps: &[(&str, Option<&str>)]) -> String {
    steps
        .iter()
        .map(|(action, value)| {
            let mut line = serde_json::json!({ "action": action });
            if let Some(value) = value {
                line["value"] = serde_json::Value::String((*value).to_string());
            }
            line.to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Minimal inspection of rendered markup.
///
/// Works on the flat markup the form templates produce: one tag per
/// `data-testid`, attributes double-quoted.
pub mod html {
    /// Find the opening tag carrying `data-testid="{test_id}"`.
    pub fn tag<'a>(html: &'a str, test_id: &str) -> Option<&'a str> {
        let needle = format!(r#"data-testid="{test_id}""#);
        let at = html.find(&needle)?;
        let start = html[..at].rfind('<')?;
        let end = at + html[at..].find('>')?;
        Some(&html[start..=end])
    }

    /// Value of an attribute on a tag, if present with a value.
    pub fn attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
        let needle = format!(r#" {name}=""#);
        let start = tag.find(&needle)? + needle.len();
        let len = tag[start..].find('"')?;
        Some(&tag[start..start + len])
    }

    /// Whether a boolean attribute (e.g. `disabled`) is present.
    pub fn has_flag(tag: &str, name: &str) -> bool {
        let inner = tag.trim_start_matches('<').trim_end_matches('>');
        inner
            .split_whitespace()
            .any(|part| part == name || part.starts_with(&format!("{name}=")))
    }

    /// Whether the tag's `class` attribute lists `class`.
    pub fn has_class(tag: &str, class: &str) -> bool {
        attr(tag, "class").is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Unescaped text between the tag carrying `test_id` and the next tag.
    pub fn text(html: &str, test_id: &str) -> Option<String> {
        let open = tag(html, test_id)?;
        let at = html.find(open)? + open.len();
        let len = html[at..].find('<')?;
        Some(unescape(html[at..at + len].trim()))
    }

    /// Undo the HTML escaping applied by the template engine.
    pub fn unescape(text: &str) -> String {
        text.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#x27;", "'")
            .replace("&#x2F;", "/")
            .replace("&amp;", "&")
    }
}

/// Assertion helpers for JSON and markup.
pub mod assert {
    use serde_json::Value;

    use super::html;

    /// Assert that a JSON value has a specific key.
    pub fn has_key(value: &Value, key: &str) {
        assert!(
            value.get(key).is_some(),
            "Expected JSON to have key '{key}', got: {value}"
        );
    }

    /// Assert that a string contains a substring.
    pub fn contains(haystack: &str, needle: &str) {
        assert!(
            haystack.contains(needle),
            "Expected string to contain '{needle}'\nActual: {haystack}"
        );
    }

    /// Assert that a string does not contain a substring.
    pub fn not_contains(haystack: &str, needle: &str) {
        assert!(
            !haystack.contains(needle),
            "Expected string to NOT contain '{needle}'\nActual: {haystack}"
        );
    }

    /// Assert an attribute value on the element carrying `test_id`.
    pub fn attr_eq(markup: &str, test_id: &str, name: &str, expected: &str) {
        let tag = html::tag(markup, test_id)
            .unwrap_or_else(|| panic!("no element with data-testid '{test_id}'\n{markup}"));
        assert_eq!(
            html::attr(tag, name),
            Some(expected),
            "attribute '{name}' on {tag}"
        );
    }

    /// Assert the element carrying `test_id` has (or lacks) a class.
    pub fn class(markup: &str, test_id: &str, class: &str, present: bool) {
        let tag = html::tag(markup, test_id)
            .unwrap_or_else(|| panic!("no element with data-testid '{test_id}'\n{markup}"));
        assert_eq!(
            html::has_class(tag, class),
            present,
            "class '{class}' on {tag}"
        );
    }

    /// Assert the element carrying `test_id` is (or is not) disabled.
    pub fn disabled(markup: &str, test_id: &str, disabled: bool) {
        let tag = html::tag(markup, test_id)
            .unwrap_or_else(|| panic!("no element with data-testid '{test_id}'\n{markup}"));
        assert_eq!(html::has_flag(tag, "disabled"), disabled, "disabled on {tag}");
    }
}
