//! Outcome sources decide how a dispatched test case ends.
//!
//! The suite manager never computes results itself. It hands each case to an
//! [`OutcomeSource`] and applies whatever comes back, so the randomized
//! simulator, the worker wrapper and test doubles are interchangeable.

mod scripted;
mod simulated;
mod worker;

pub use scripted::{ScriptedOutcome, ScriptedOutcomeSource};
pub use simulated::{SimulatedOutcomeSource, SIMULATED_FAILURES};
pub use worker::WorkerOutcomeSource;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::framework::Framework;
use crate::suite::TestStatus;

/// A case sent out for evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeRequest {
    pub case_id: String,
    pub source_code: String,
    pub framework: Framework,
}

/// The result reported for one dispatched case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub case_id: String,
    pub status: TestStatus,
    pub duration_ms: u64,
    pub coverage_percent: u32,
    pub error: Option<String>,
    pub fix_suggestion: Option<String>,
}

impl Outcome {
    pub fn passed(case_id: impl Into<String>, duration_ms: u64, coverage_percent: u32) -> Self {
        Self {
            case_id: case_id.into(),
            status: TestStatus::Passed,
            duration_ms,
            coverage_percent,
            error: None,
            fix_suggestion: None,
        }
    }

    pub fn failed(
        case_id: impl Into<String>,
        duration_ms: u64,
        coverage_percent: u32,
        error: impl Into<String>,
        fix_suggestion: impl Into<String>,
    ) -> Self {
        Self {
            case_id: case_id.into(),
            status: TestStatus::Failed,
            duration_ms,
            coverage_percent,
            error: Some(error.into()),
            fix_suggestion: Some(fix_suggestion.into()),
        }
    }

    /// Checks the outcome contract.
    ///
    /// Status must be passed or failed. A failed outcome carries both an
    /// error and a fix suggestion; a passed one carries neither.
    pub fn validate(&self) -> Result<(), OutcomeError> {
        match self.status {
            TestStatus::Passed => {
                if self.error.is_some() || self.fix_suggestion.is_some() {
                    return Err(OutcomeError::InvalidOutcome(
                        "passed outcome carries an error".to_string(),
                    ));
                }
            }
            TestStatus::Failed => {
                if self.error.is_none() || self.fix_suggestion.is_none() {
                    return Err(OutcomeError::InvalidOutcome(
                        "failed outcome is missing an error or fix suggestion".to_string(),
                    ));
                }
            }
            other => {
                return Err(OutcomeError::InvalidOutcome(format!(
                    "status {} is not a valid outcome",
                    other
                )));
            }
        }

        if self.coverage_percent > 100 {
            return Err(OutcomeError::InvalidOutcome(format!(
                "coverage {}% is out of range",
                self.coverage_percent
            )));
        }

        Ok(())
    }
}

/// Errors an outcome source can report instead of an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutcomeError {
    #[error("Outcome channel closed")]
    ChannelClosed,

    #[error("Invalid outcome: {0}")]
    InvalidOutcome(String),

    #[error("Outcome source failed: {0}")]
    Source(String),
}

/// Decides the result of a dispatched test case.
///
/// Implementations must produce exactly one outcome per request and echo the
/// request's `case_id`.
#[async_trait]
pub trait OutcomeSource: Send + Sync {
    async fn evaluate(&self, request: OutcomeRequest) -> Result<Outcome, OutcomeError>;
}

#[async_trait]
impl<T: OutcomeSource + ?Sized> OutcomeSource for std::sync::Arc<T> {
    async fn evaluate(&self, request: OutcomeRequest) -> Result<Outcome, OutcomeError> {
        (**self).evaluate(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_passed() {
        assert!(Outcome::passed("a", 10, 80).validate().is_ok());

        let mut bad = Outcome::passed("a", 10, 80);
        bad.error = Some("oops".to_string());
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_validate_failed() {
        assert!(Outcome::failed("a", 10, 80, "err", "fix").validate().is_ok());

        let mut bad = Outcome::failed("a", 10, 80, "err", "fix");
        bad.fix_suggestion = None;
        assert!(matches!(bad.validate(), Err(OutcomeError::InvalidOutcome(_))));
    }

    #[test]
    fn test_validate_rejects_non_terminal_and_range() {
        let mut running = Outcome::passed("a", 10, 80);
        running.status = TestStatus::Running;
        assert!(running.validate().is_err());

        assert!(Outcome::passed("a", 10, 101).validate().is_err());
    }
}
