use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{Outcome, OutcomeError, OutcomeRequest, OutcomeSource};

/// One queued answer for [`ScriptedOutcomeSource`].
#[derive(Debug, Clone)]
pub enum ScriptedOutcome {
    Pass { duration_ms: u64, coverage: u32 },
    Fail {
        duration_ms: u64,
        coverage: u32,
        error: String,
        fix_suggestion: String,
    },
    /// Answers after the given delay.
    Delayed(Duration, Box<ScriptedOutcome>),
    /// Never answers.
    Hang,
    /// Reports a source error.
    Error(String),
    /// Answers with a case id other than the one requested.
    WrongCase,
}

impl ScriptedOutcome {
    pub fn pass(duration_ms: u64, coverage: u32) -> Self {
        ScriptedOutcome::Pass {
            duration_ms,
            coverage,
        }
    }

    pub fn fail(duration_ms: u64, coverage: u32) -> Self {
        ScriptedOutcome::Fail {
            duration_ms,
            coverage,
            error: "Assertion error".to_string(),
            fix_suggestion: "Review the assertion logic".to_string(),
        }
    }
}

/// Deterministic outcome source that answers from a queue.
///
/// The n-th request receives the n-th queued answer. When the queue is empty
/// every request passes with the fallback values. All requests are recorded
/// in dispatch order.
pub struct ScriptedOutcomeSource {
    script: Mutex<VecDeque<ScriptedOutcome>>,
    requests: Mutex<Vec<OutcomeRequest>>,
    fallback: (u64, u32),
}

impl ScriptedOutcomeSource {
    pub fn new(script: impl IntoIterator<Item = ScriptedOutcome>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
            fallback: (100, 100),
        }
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<OutcomeRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn next(&self) -> ScriptedOutcome {
        self.script
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or(ScriptedOutcome::pass(self.fallback.0, self.fallback.1))
    }
}

async fn answer(case_id: String, scripted: ScriptedOutcome) -> Result<Outcome, OutcomeError> {
    let mut scripted = scripted;
    loop {
        match scripted {
            ScriptedOutcome::Pass {
                duration_ms,
                coverage,
            } => return Ok(Outcome::passed(case_id, duration_ms, coverage)),
            ScriptedOutcome::Fail {
                duration_ms,
                coverage,
                error,
                fix_suggestion,
            } => {
                return Ok(Outcome::failed(
                    case_id,
                    duration_ms,
                    coverage,
                    error,
                    fix_suggestion,
                ))
            }
            ScriptedOutcome::Delayed(delay, inner) => {
                tokio::time::sleep(delay).await;
                scripted = *inner;
            }
            ScriptedOutcome::Hang => std::future::pending::<()>().await,
            ScriptedOutcome::Error(message) => return Err(OutcomeError::Source(message)),
            ScriptedOutcome::WrongCase => {
                return Ok(Outcome::passed(format!("{}-other", case_id), 1, 1))
            }
        }
    }
}

#[async_trait]
impl OutcomeSource for ScriptedOutcomeSource {
    async fn evaluate(&self, request: OutcomeRequest) -> Result<Outcome, OutcomeError> {
        let scripted = self.next();
        let case_id = request.case_id.clone();
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request);

        answer(case_id, scripted).await
    }
}
