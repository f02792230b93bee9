use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use super::{Outcome, OutcomeError, OutcomeRequest, OutcomeSource};
use crate::config::{
    DEFAULT_PASS_RATE, SIMULATED_COVERAGE_MAX, SIMULATED_COVERAGE_MIN, SIMULATED_DURATION_MAX_MS,
    SIMULATED_DURATION_MIN_MS,
};

/// Error messages and matching fix suggestions for simulated failures.
pub const SIMULATED_FAILURES: &[(&str, &str)] = &[
    (
        "Cannot read property 'x' of undefined",
        "Check if the property exists before accessing it",
    ),
    (
        "Expected 'true' but received 'false'",
        "Verify the expected value matches the actual value",
    ),
    (
        "Timeout exceeded",
        "Increase the timeout value or optimize the test",
    ),
    (
        "Element not found",
        "Ensure the element is rendered before accessing it",
    ),
    ("Assertion error", "Review the assertion logic"),
];

/// Produces random outcomes; nothing is actually executed.
///
/// Passes with probability `pass_rate`, reports a duration in
/// `[200, 1200)` ms and coverage in `[70, 100)`.
pub struct SimulatedOutcomeSource {
    rng: Mutex<StdRng>,
    pass_rate: f64,
    latency: bool,
}

impl SimulatedOutcomeSource {
    /// Creates a simulator. A seed makes the outcome sequence reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            rng: Mutex::new(rng),
            pass_rate: DEFAULT_PASS_RATE,
            latency: false,
        }
    }

    /// Sets the pass probability, clamped to `[0, 1]`.
    pub fn with_pass_rate(mut self, pass_rate: f64) -> Self {
        self.pass_rate = pass_rate.clamp(0.0, 1.0);
        self
    }

    /// Sleeps for the simulated duration before answering.
    pub fn with_latency(mut self, latency: bool) -> Self {
        self.latency = latency;
        self
    }

    fn roll(&self, case_id: String) -> Outcome {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());

        let success = rng.gen_bool(self.pass_rate);
        let duration = rng.gen_range(SIMULATED_DURATION_MIN_MS..SIMULATED_DURATION_MAX_MS);
        let coverage = rng.gen_range(SIMULATED_COVERAGE_MIN..SIMULATED_COVERAGE_MAX);

        if success {
            Outcome::passed(case_id, duration, coverage)
        } else {
            let (error, fix) = SIMULATED_FAILURES[rng.gen_range(0..SIMULATED_FAILURES.len())];
            Outcome::failed(case_id, duration, coverage, error, fix)
        }
    }
}

impl Default for SimulatedOutcomeSource {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl OutcomeSource for SimulatedOutcomeSource {
    async fn evaluate(&self, request: OutcomeRequest) -> Result<Outcome, OutcomeError> {
        let outcome = self.roll(request.case_id);
        trace!(
            case_id = %outcome.case_id,
            status = %outcome.status,
            framework = %request.framework,
            "simulated outcome"
        );

        if self.latency {
            tokio::time::sleep(Duration::from_millis(outcome.duration_ms)).await;
        }

        Ok(outcome)
    }
}
