//! Test file template engine.
//!
//! Maps `(source, test type, framework)` to concrete test file text:
//! the component name is pulled out of the source, a template is looked up
//! in the built-in table and its `{{placeholder}}` tokens are substituted.
//! Rendering is pure; the same inputs always produce the same text.

mod extract;
mod table;

pub use extract::{extract_component_name, COMPONENT_PATTERNS, DEFAULT_COMPONENT_NAME};

use thiserror::Error;

use crate::framework::{Framework, TestType};

/// Errors produced while selecting a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Unsupported test type: {0}")]
    UnsupportedTestType(String),

    #[error("Unsupported framework {framework} for {test_type} tests")]
    UnsupportedFramework {
        test_type: TestType,
        framework: Framework,
    },

    #[error("Unknown framework: {0}")]
    UnknownFramework(String),
}

/// Fixed placeholder values. Name-derived placeholders are handled in [`substitute`].
const FIXED_PLACEHOLDERS: &[(&str, &str)] = &[
    ("{{role}}", "button"),
    ("{{testId}}", "test-id"),
    ("{{inputSelector}}", r#"input[type="text"]"#),
    ("{{buttonSelector}}", r#"button[type="submit"]"#),
    ("{{resultSelector}}", r#"[data-testid="result"]"#),
    ("{{errorSelector}}", ".error-message"),
    ("{{linkSelector}}", r#"a[href="/new-page"]"#),
    ("{{actionSelector}}", r#"[data-testid="action-button"]"#),
];

/// Renders a test file for the component found in `source`.
pub fn render(
    source: &str,
    test_type: TestType,
    framework: Framework,
) -> Result<String, TemplateError> {
    let name = extract_component_name(source);
    render_for(&name, test_type, framework)
}

/// Renders a test file for an already-known component name.
pub fn render_for(
    component_name: &str,
    test_type: TestType,
    framework: Framework,
) -> Result<String, TemplateError> {
    let template = lookup(test_type, framework)?;
    Ok(substitute(template, component_name))
}

/// Looks up the raw template for a `(test type, framework)` pair.
pub fn lookup(test_type: TestType, framework: Framework) -> Result<&'static str, TemplateError> {
    let row = table::row(test_type)
        .ok_or_else(|| TemplateError::UnsupportedTestType(test_type.as_str().to_string()))?;

    row.iter()
        .find(|(fw, _)| *fw == framework)
        .map(|(_, template)| *template)
        .ok_or(TemplateError::UnsupportedFramework {
            test_type,
            framework,
        })
}

/// Frameworks that have a template for `test_type`.
pub fn supported_frameworks(test_type: TestType) -> Vec<Framework> {
    table::row(test_type)
        .map(|row| row.iter().map(|(fw, _)| *fw).collect())
        .unwrap_or_default()
}

/// Returns true if the table has a template for the pair.
pub fn is_supported(test_type: TestType, framework: Framework) -> bool {
    lookup(test_type, framework).is_ok()
}

/// Replaces every known placeholder in `template`.
///
/// Unknown `{{...}}` tokens are left untouched.
pub fn substitute(template: &str, component_name: &str) -> String {
    let lower = component_name.to_lowercase();
    let selector = format!(r#"[data-testid="{}"]"#, lower);

    let mut out = template
        .replace("{{ComponentName}}", component_name)
        .replace("{{className}}", &lower)
        .replace("{{selector}}", &selector);

    for (token, value) in FIXED_PLACEHOLDERS {
        out = out.replace(token, value);
    }

    out
}
