use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::template::TemplateError;

/// Test framework a suite is generated for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    #[default]
    Jest,
    Vitest,
    Cypress,
    Playwright,
    Mocha,
    Jasmine,
}

impl Framework {
    /// All frameworks, in display order.
    pub const ALL: [Framework; 6] = [
        Framework::Jest,
        Framework::Vitest,
        Framework::Cypress,
        Framework::Playwright,
        Framework::Mocha,
        Framework::Jasmine,
    ];

    /// Returns the lowercase identifier used in config files and on the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::Jest => "jest",
            Framework::Vitest => "vitest",
            Framework::Cypress => "cypress",
            Framework::Playwright => "playwright",
            Framework::Mocha => "mocha",
            Framework::Jasmine => "jasmine",
        }
    }

    /// Returns a human-readable name for the framework.
    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::Jest => "Jest",
            Framework::Vitest => "Vitest",
            Framework::Cypress => "Cypress",
            Framework::Playwright => "Playwright",
            Framework::Mocha => "Mocha",
            Framework::Jasmine => "Jasmine",
        }
    }

    /// File suffix for exported test files.
    ///
    /// Jest and Vitest pick up `*.test.js`; everything else uses `*.spec.js`.
    pub fn test_file_suffix(&self) -> &'static str {
        match self {
            Framework::Jest | Framework::Vitest => "test.js",
            _ => "spec.js",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Framework::ALL
            .into_iter()
            .find(|fw| fw.as_str() == lowered)
            .ok_or(TemplateError::UnknownFramework(s.to_string()))
    }
}

/// Kind of test a case is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestType {
    Unit,
    Integration,
    E2e,
    Performance,
    Accessibility,
}

impl TestType {
    pub const ALL: [TestType; 5] = [
        TestType::Unit,
        TestType::Integration,
        TestType::E2e,
        TestType::Performance,
        TestType::Accessibility,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TestType::Unit => "unit",
            TestType::Integration => "integration",
            TestType::E2e => "e2e",
            TestType::Performance => "performance",
            TestType::Accessibility => "accessibility",
        }
    }

    /// Identifier with the first letter upper-cased ("e2e" becomes "E2e").
    pub fn display_name(&self) -> &'static str {
        match self {
            TestType::Unit => "Unit",
            TestType::Integration => "Integration",
            TestType::E2e => "E2e",
            TestType::Performance => "Performance",
            TestType::Accessibility => "Accessibility",
        }
    }

    /// Number of assertions a generated case of this type is credited with.
    pub fn assertion_count(&self) -> u32 {
        match self {
            TestType::Unit => 3,
            TestType::Integration => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestType {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        TestType::ALL
            .into_iter()
            .find(|tt| tt.as_str() == lowered)
            .ok_or(TemplateError::UnsupportedTestType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_parse() {
        assert_eq!("jest".parse::<Framework>().unwrap(), Framework::Jest);
        assert_eq!(" Playwright ".parse::<Framework>().unwrap(), Framework::Playwright);
        assert!(matches!(
            "karma".parse::<Framework>(),
            Err(TemplateError::UnknownFramework(name)) if name == "karma"
        ));
    }

    #[test]
    fn test_test_type_parse() {
        assert_eq!("E2E".parse::<TestType>().unwrap(), TestType::E2e);
        assert!(matches!(
            "visual".parse::<TestType>(),
            Err(TemplateError::UnsupportedTestType(name)) if name == "visual"
        ));
    }

    #[test]
    fn test_file_suffix() {
        assert_eq!(Framework::Jest.test_file_suffix(), "test.js");
        assert_eq!(Framework::Vitest.test_file_suffix(), "test.js");
        assert_eq!(Framework::Cypress.test_file_suffix(), "spec.js");
        assert_eq!(Framework::Mocha.test_file_suffix(), "spec.js");
    }

    #[test]
    fn test_assertion_counts() {
        assert_eq!(TestType::Unit.assertion_count(), 3);
        assert_eq!(TestType::Integration.assertion_count(), 2);
        assert_eq!(TestType::Accessibility.assertion_count(), 1);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&TestType::E2e).unwrap();
        assert_eq!(json, "\"e2e\"");
        let fw: Framework = serde_json::from_str("\"vitest\"").unwrap();
        assert_eq!(fw, Framework::Vitest);
    }
}
