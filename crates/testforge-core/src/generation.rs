use serde::{Deserialize, Serialize};

use crate::framework::{Framework, TestType};

/// Options a suite is generated with.
///
/// A copy is attached to every suite at generation time and never changed
/// afterwards, so later edits to the session defaults do not rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestGenerationConfig {
    /// Target test framework.
    pub framework: Framework,
    /// Requested test types, in generation order.
    pub test_types: Vec<TestType>,
    pub coverage: bool,
    pub mocking: bool,
    pub accessibility: bool,
    pub performance: bool,
    pub visual_regression: bool,
}

impl Default for TestGenerationConfig {
    fn default() -> Self {
        Self {
            framework: Framework::Jest,
            test_types: vec![TestType::Unit, TestType::Integration],
            coverage: true,
            mocking: true,
            accessibility: false,
            performance: false,
            visual_regression: false,
        }
    }
}

impl TestGenerationConfig {
    /// Creates a config with the given framework and test types and default toggles.
    pub fn new(framework: Framework, test_types: impl IntoIterator<Item = TestType>) -> Self {
        Self {
            framework,
            test_types: unique_test_types(test_types),
            ..Self::default()
        }
    }

    /// Drops repeated test types, keeping the first occurrence of each.
    pub fn dedup_test_types(&mut self) {
        self.test_types = unique_test_types(std::mem::take(&mut self.test_types));
    }

    /// Adds a test type if it is not already requested.
    pub fn with_test_type(mut self, test_type: TestType) -> Self {
        if !self.test_types.contains(&test_type) {
            self.test_types.push(test_type);
        }
        self
    }

    pub fn with_framework(mut self, framework: Framework) -> Self {
        self.framework = framework;
        self
    }
}

/// Requested test types form a set; order of first mention is kept.
pub fn unique_test_types(test_types: impl IntoIterator<Item = TestType>) -> Vec<TestType> {
    let mut unique = Vec::new();
    for test_type in test_types {
        if !unique.contains(&test_type) {
            unique.push(test_type);
        }
    }
    unique
}
