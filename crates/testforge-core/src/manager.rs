use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::{RunnerConfig, SOURCE_FAILURE_FIX, TIMEOUT_ERROR, TIMEOUT_FIX};
use crate::framework::{Framework, TestType};
use crate::generation::TestGenerationConfig;
use crate::history::{HistoryEntry, RunResults};
use crate::outcome::{Outcome, OutcomeRequest, OutcomeSource};
use crate::store::SessionStore;
use crate::suite::{TestCase, TestStatus, TestSuite};
use crate::template::{extract_component_name, TemplateError};

/// Progress events emitted while a suite runs.
#[derive(Debug, Clone, PartialEq)]
pub enum RunProgress {
    /// The suite was reset and dispatch is about to begin.
    Started { suite_id: String, total: usize },
    /// A case was marked running and sent to the outcome source.
    CaseStarted {
        index: usize,
        case_id: String,
        name: String,
    },
    /// A case reached a terminal state.
    CaseFinished {
        index: usize,
        case_id: String,
        status: TestStatus,
    },
    /// Every case finished and a history entry was recorded.
    Completed { results: RunResults },
}

/// Generates suites and drives their test cases through a run.
///
/// The session store is passed in by the caller on every call. A run holds
/// the store exclusively until it finishes, so runs never overlap.
pub struct SuiteManager<O: OutcomeSource> {
    outcomes: O,
    config: RunnerConfig,
}

impl<O: OutcomeSource> SuiteManager<O> {
    /// Creates a manager with the default runner configuration.
    pub fn new(outcomes: O) -> Self {
        Self::with_config(outcomes, RunnerConfig::default())
    }

    pub fn with_config(outcomes: O, config: RunnerConfig) -> Self {
        Self { outcomes, config }
    }

    pub fn outcomes(&self) -> &O {
        &self.outcomes
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Consumes the manager and returns its outcome source.
    pub fn into_outcomes(self) -> O {
        self.outcomes
    }

    /// Generates a suite for `source` and adds it to the store.
    ///
    /// One case is created per distinct requested test type, in the order each
    /// type is first listed.
    /// Every type is checked against the template table before anything is
    /// stored, so a failed call leaves the store untouched.
    pub fn generate_suite(
        &self,
        store: &mut SessionStore,
        source: &str,
        config: &TestGenerationConfig,
    ) -> Result<TestSuite, ManagerError> {
        if source.trim().is_empty() {
            return Err(ManagerError::EmptyInput);
        }
        if config.test_types.is_empty() {
            return Err(ManagerError::NoTestTypesSelected);
        }

        let mut config = config.clone();
        config.dedup_test_types();

        let component_name = extract_component_name(source);
        let tests = config
            .test_types
            .iter()
            .map(|test_type| TestCase::generate(&component_name, *test_type, config.framework))
            .collect::<Result<Vec<_>, _>>()?;

        let framework = config.framework;
        let suite = TestSuite::new(&component_name, source, config, tests);
        info!(
            suite_id = %suite.id,
            component = %component_name,
            framework = %framework,
            cases = suite.total_tests,
            "generated test suite"
        );

        store.insert_suite(suite.clone());
        Ok(suite)
    }

    /// Removes a suite from the store. Its history entries remain.
    pub fn delete_suite(
        &self,
        store: &mut SessionStore,
        suite_id: &str,
    ) -> Result<TestSuite, ManagerError> {
        store
            .remove_suite(suite_id)
            .ok_or_else(|| ManagerError::SuiteNotFound(suite_id.to_string()))
    }

    /// Runs every case of a suite and records a history entry.
    pub async fn run_suite(
        &self,
        store: &mut SessionStore,
        suite_id: &str,
    ) -> Result<HistoryEntry, ManagerError> {
        self.run_suite_with_progress(store, suite_id, None).await
    }

    /// Runs a suite, reporting progress on `progress` if given.
    ///
    /// All cases are reset to pending first. Cases are then dispatched one at
    /// a time in suite order; each dispatch waits for its outcome (bounded by
    /// the outcome timeout) before the next begins. A case whose outcome
    /// times out, errors or breaks the outcome contract is marked failed, so
    /// every case is terminal when this returns.
    pub async fn run_suite_with_progress(
        &self,
        store: &mut SessionStore,
        suite_id: &str,
        progress: Option<&mpsc::UnboundedSender<RunProgress>>,
    ) -> Result<HistoryEntry, ManagerError> {
        let suite = store
            .suite_mut(suite_id)
            .ok_or_else(|| ManagerError::SuiteNotFound(suite_id.to_string()))?;

        suite.reset();
        let framework = suite.config.framework;
        let total = suite.tests.len();

        info!(suite_id, total, "starting suite run");
        emit(
            progress,
            RunProgress::Started {
                suite_id: suite_id.to_string(),
                total,
            },
        );

        for index in 0..total {
            let case = &mut suite.tests[index];
            case.status = TestStatus::Running;

            let request = OutcomeRequest {
                case_id: case.id.clone(),
                source_code: case.code.clone(),
                framework,
            };
            debug!(case_id = %case.id, name = %case.name, "dispatching case");
            emit(
                progress,
                RunProgress::CaseStarted {
                    index,
                    case_id: case.id.clone(),
                    name: case.name.clone(),
                },
            );

            let outcome = self.dispatch(request).await;
            suite.apply_outcome(&outcome);

            emit(
                progress,
                RunProgress::CaseFinished {
                    index,
                    case_id: outcome.case_id.clone(),
                    status: outcome.status,
                },
            );

            if index + 1 < total && !self.config.settle_delay().is_zero() {
                tokio::time::sleep(self.config.settle_delay()).await;
            }
        }

        let results = suite.results();
        let entry = HistoryEntry::new(suite_id, results);
        store.push_history(entry.clone());

        info!(
            suite_id,
            passed = results.passed,
            failed = results.failed,
            coverage = results.coverage,
            duration_ms = results.duration_ms,
            "suite run complete"
        );
        emit(progress, RunProgress::Completed { results });

        Ok(entry)
    }

    /// Sends one case to the outcome source and returns a usable outcome.
    ///
    /// The returned outcome always names the dispatched case and always has
    /// a terminal status.
    async fn dispatch(&self, request: OutcomeRequest) -> Outcome {
        let case_id = request.case_id.clone();
        let timeout = self.config.outcome_timeout();

        match tokio::time::timeout(timeout, self.outcomes.evaluate(request)).await {
            Ok(Ok(outcome)) if outcome.case_id != case_id => {
                warn!(
                    %case_id,
                    received = %outcome.case_id,
                    "outcome names a different case"
                );
                Outcome::failed(
                    case_id,
                    0,
                    0,
                    format!("Outcome source answered for unknown case {}", outcome.case_id),
                    SOURCE_FAILURE_FIX,
                )
            }
            Ok(Ok(outcome)) => match outcome.validate() {
                Ok(()) => outcome,
                Err(e) => {
                    warn!(%case_id, error = %e, "outcome rejected");
                    Outcome::failed(case_id, 0, 0, e.to_string(), SOURCE_FAILURE_FIX)
                }
            },
            Ok(Err(e)) => {
                warn!(%case_id, error = %e, "outcome source failed");
                Outcome::failed(case_id, 0, 0, e.to_string(), SOURCE_FAILURE_FIX)
            }
            Err(_) => {
                warn!(%case_id, timeout_ms = self.config.outcome_timeout_ms, "outcome timed out");
                Outcome::failed(
                    case_id,
                    self.config.outcome_timeout_ms,
                    0,
                    TIMEOUT_ERROR,
                    TIMEOUT_FIX,
                )
            }
        }
    }
}

fn emit(progress: Option<&mpsc::UnboundedSender<RunProgress>>, event: RunProgress) {
    if let Some(tx) = progress {
        // A dropped receiver only means nobody is watching.
        let _ = tx.send(event);
    }
}

/// Errors that can occur in SuiteManager operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManagerError {
    #[error("Component source is empty")]
    EmptyInput,

    #[error("No test types selected")]
    NoTestTypesSelected,

    #[error("Unsupported test type: {0}")]
    UnsupportedTestType(String),

    #[error("Unsupported framework {framework} for {test_type} tests")]
    UnsupportedFramework {
        test_type: TestType,
        framework: Framework,
    },

    #[error("Unknown framework: {0}")]
    UnknownFramework(String),

    #[error("Suite not found: {0}")]
    SuiteNotFound(String),
}

impl From<TemplateError> for ManagerError {
    fn from(err: TemplateError) -> Self {
        match err {
            TemplateError::UnsupportedTestType(name) => ManagerError::UnsupportedTestType(name),
            TemplateError::UnsupportedFramework {
                test_type,
                framework,
            } => ManagerError::UnsupportedFramework {
                test_type,
                framework,
            },
            TemplateError::UnknownFramework(name) => ManagerError::UnknownFramework(name),
        }
    }
}
