use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::framework::{Framework, TestType};
use crate::generation::TestGenerationConfig;
use crate::history::RunResults;
use crate::outcome::Outcome;
use crate::template::{self, TemplateError};

/// Lifecycle state of a single test case.
///
/// Cases move `Pending → Running → {Passed, Failed}` during a run.
/// `Skipped` is terminal but nothing assigns it yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    #[default]
    Pending,
    Running,
    Passed,
    Failed,
    Skipped,
}

impl TestStatus {
    /// Returns true for states a run can end in.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TestStatus::Passed | TestStatus::Failed | TestStatus::Skipped)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TestStatus::Pending => "pending",
            TestStatus::Running => "running",
            TestStatus::Passed => "passed",
            TestStatus::Failed => "failed",
            TestStatus::Skipped => "skipped",
        }
    }
}

impl std::fmt::Display for TestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One generated test file and its latest result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub id: String,
    pub name: String,
    pub test_type: TestType,
    pub status: TestStatus,
    pub duration_ms: u64,
    /// Generated test file text.
    pub code: String,
    pub description: String,
    pub assertions: u32,
    /// Coverage percentage, 0-100.
    pub coverage: u32,
    pub error: Option<String>,
    pub fix_suggestion: Option<String>,
}

impl TestCase {
    /// Generates a pending case for `component_name`.
    pub fn generate(
        component_name: &str,
        test_type: TestType,
        framework: Framework,
    ) -> Result<Self, TemplateError> {
        let code = template::render_for(component_name, test_type, framework)?;

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: format!("{} {} Tests", component_name, test_type.display_name()),
            test_type,
            status: TestStatus::Pending,
            duration_ms: 0,
            code,
            description: format!(
                "Automatically generated {} tests for {}",
                test_type.as_str(),
                component_name
            ),
            assertions: test_type.assertion_count(),
            coverage: 0,
            error: None,
            fix_suggestion: None,
        })
    }

    /// Clears results and returns the case to `Pending`.
    pub fn reset(&mut self) {
        self.status = TestStatus::Pending;
        self.duration_ms = 0;
        self.coverage = 0;
        self.error = None;
        self.fix_suggestion = None;
    }

    /// Copies an outcome's result fields onto the case.
    pub fn apply(&mut self, outcome: &Outcome) {
        self.status = outcome.status;
        self.duration_ms = outcome.duration_ms;
        self.coverage = outcome.coverage_percent.min(100);
        self.error = outcome.error.clone();
        self.fix_suggestion = outcome.fix_suggestion.clone();
    }

    /// Short chart label: the second word of the name, i.e. the test type.
    pub fn label(&self) -> &str {
        self.name.split(' ').nth(1).unwrap_or(&self.name)
    }
}

/// Case counts by status, used for status charts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBreakdown {
    pub passed: usize,
    pub failed: usize,
    /// Everything that is neither passed nor failed.
    pub pending: usize,
}

/// A set of generated cases for one source input and one configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestSuite {
    pub id: String,
    pub name: String,
    /// Cases in generation order.
    pub tests: Vec<TestCase>,
    pub total_tests: usize,
    pub passed_tests: usize,
    pub failed_tests: usize,
    /// Floor of the mean case coverage.
    pub coverage: u32,
    /// Sum of case durations in milliseconds.
    pub duration_ms: u64,
    pub created_at: DateTime<Utc>,
    /// The source text the suite was generated from.
    pub component_code: String,
    /// Snapshot of the generation options.
    pub config: TestGenerationConfig,
}

impl TestSuite {
    /// Creates a suite from already generated cases. Result aggregates start at zero.
    pub fn new(
        component_name: &str,
        component_code: impl Into<String>,
        config: TestGenerationConfig,
        tests: Vec<TestCase>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: format!("{} Tests", component_name),
            total_tests: tests.len(),
            tests,
            passed_tests: 0,
            failed_tests: 0,
            coverage: 0,
            duration_ms: 0,
            created_at: Utc::now(),
            component_code: component_code.into(),
            config,
        }
    }

    /// Recomputes every aggregate from the case list.
    pub fn recompute(&mut self) {
        self.total_tests = self.tests.len();
        self.passed_tests = self.count(TestStatus::Passed);
        self.failed_tests = self.count(TestStatus::Failed);
        self.duration_ms = self.tests.iter().map(|t| t.duration_ms).sum();

        let coverage_sum: u64 = self.tests.iter().map(|t| u64::from(t.coverage)).sum();
        self.coverage = if self.tests.is_empty() {
            0
        } else {
            (coverage_sum / self.tests.len() as u64) as u32
        };
    }

    /// Resets every case to `Pending` and zeroes the aggregates.
    pub fn reset(&mut self) {
        for case in &mut self.tests {
            case.reset();
        }
        self.recompute();
    }

    /// Applies an outcome to the case it names and recomputes aggregates.
    ///
    /// Returns false if no case has the outcome's id.
    pub fn apply_outcome(&mut self, outcome: &Outcome) -> bool {
        match self.case_mut(&outcome.case_id) {
            Some(case) => {
                case.apply(outcome);
                self.recompute();
                true
            }
            None => false,
        }
    }

    pub fn case(&self, case_id: &str) -> Option<&TestCase> {
        self.tests.iter().find(|t| t.id == case_id)
    }

    pub fn case_mut(&mut self, case_id: &str) -> Option<&mut TestCase> {
        self.tests.iter_mut().find(|t| t.id == case_id)
    }

    pub fn count(&self, status: TestStatus) -> usize {
        self.tests.iter().filter(|t| t.status == status).count()
    }

    /// True once every case has reached a terminal state.
    pub fn is_complete(&self) -> bool {
        self.tests.iter().all(|t| t.status.is_terminal())
    }

    pub fn status_breakdown(&self) -> StatusBreakdown {
        StatusBreakdown {
            passed: self.passed_tests,
            failed: self.failed_tests,
            pending: self
                .total_tests
                .saturating_sub(self.passed_tests + self.failed_tests),
        }
    }

    /// `(label, coverage)` per case, in case order.
    pub fn coverage_series(&self) -> Vec<(String, u32)> {
        self.tests
            .iter()
            .map(|t| (t.label().to_string(), t.coverage))
            .collect()
    }

    /// `(label, duration_ms)` per case, in case order.
    pub fn duration_series(&self) -> Vec<(String, u64)> {
        self.tests
            .iter()
            .map(|t| (t.label().to_string(), t.duration_ms))
            .collect()
    }

    /// Snapshot of the current aggregates.
    pub fn results(&self) -> RunResults {
        RunResults {
            passed: self.passed_tests,
            failed: self.failed_tests,
            coverage: self.coverage,
            duration_ms: self.duration_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suite_with(types: &[TestType]) -> TestSuite {
        let config = TestGenerationConfig::new(Framework::Jest, types.iter().copied());
        let tests = types
            .iter()
            .map(|tt| TestCase::generate("Button", *tt, Framework::Jest).unwrap())
            .collect();
        TestSuite::new("Button", "export function Button() {}", config, tests)
    }

    #[test]
    fn test_case_generation() {
        let case = TestCase::generate("Button", TestType::Unit, Framework::Jest).unwrap();
        assert_eq!(case.name, "Button Unit Tests");
        assert_eq!(case.description, "Automatically generated unit tests for Button");
        assert_eq!(case.assertions, 3);
        assert_eq!(case.status, TestStatus::Pending);
        assert!(case.code.contains("describe('Button'"));
        assert_eq!(case.label(), "Unit");
    }

    #[test]
    fn test_case_generation_unsupported() {
        let err = TestCase::generate("Button", TestType::Performance, Framework::Jest);
        assert!(matches!(err, Err(TemplateError::UnsupportedFramework { .. })));
    }

    #[test]
    fn test_new_suite_zeroed() {
        let suite = suite_with(&[TestType::Unit, TestType::Integration]);
        assert_eq!(suite.name, "Button Tests");
        assert_eq!(suite.total_tests, 2);
        assert_eq!(suite.passed_tests, 0);
        assert_eq!(suite.failed_tests, 0);
        assert_eq!(suite.coverage, 0);
        assert_eq!(suite.duration_ms, 0);
    }

    #[test]
    fn test_recompute_floors_mean_coverage() {
        let mut suite = suite_with(&[TestType::Unit, TestType::Integration]);
        let first = suite.tests[0].id.clone();
        let second = suite.tests[1].id.clone();

        assert!(suite.apply_outcome(&Outcome::passed(first, 300, 80)));
        assert!(suite.apply_outcome(&Outcome::failed(second, 450, 75, "boom", "fix it")));

        assert_eq!(suite.passed_tests, 1);
        assert_eq!(suite.failed_tests, 1);
        assert_eq!(suite.duration_ms, 750);
        // (80 + 75) / 2 = 77.5
        assert_eq!(suite.coverage, 77);
        assert!(suite.is_complete());
    }

    #[test]
    fn test_apply_unknown_case() {
        let mut suite = suite_with(&[TestType::Unit]);
        assert!(!suite.apply_outcome(&Outcome::passed("nope", 1, 1)));
        assert_eq!(suite.passed_tests, 0);
    }

    #[test]
    fn test_reset_clears_results() {
        let mut suite = suite_with(&[TestType::Unit]);
        let id = suite.tests[0].id.clone();
        suite.apply_outcome(&Outcome::failed(id, 100, 90, "e", "f"));

        suite.reset();
        let case = &suite.tests[0];
        assert_eq!(case.status, TestStatus::Pending);
        assert_eq!(case.duration_ms, 0);
        assert!(case.error.is_none());
        assert!(case.fix_suggestion.is_none());
        assert_eq!(suite.failed_tests, 0);
        assert_eq!(suite.coverage, 0);
    }

    #[test]
    fn test_status_breakdown_and_series() {
        let mut suite = suite_with(&[TestType::Unit, TestType::Integration]);
        let id = suite.tests[1].id.clone();
        suite.apply_outcome(&Outcome::passed(id, 250, 92));

        let breakdown = suite.status_breakdown();
        assert_eq!(breakdown, StatusBreakdown { passed: 1, failed: 0, pending: 1 });
        assert_eq!(
            suite.coverage_series(),
            vec![("Unit".to_string(), 0), ("Integration".to_string(), 92)]
        );
        assert_eq!(suite.duration_series()[1], ("Integration".to_string(), 250));
    }

    #[test]
    fn test_empty_suite_coverage() {
        let mut suite = TestSuite::new("X", "x", TestGenerationConfig::default(), Vec::new());
        suite.recompute();
        assert_eq!(suite.coverage, 0);
        assert!(suite.is_complete());
    }
}
