//! Default values for TestForge configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Config File Defaults
// ============================================================================

/// Project-local config file name.
pub const DEFAULT_CONFIG_FILE: &str = "testforge.toml";

/// Directory under the user config dir that holds `config.toml`.
pub const DEFAULT_CONFIG_DIR: &str = "testforge";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "TESTFORGE_";

// ============================================================================
// Runner Defaults
// ============================================================================

/// Pause between one case finishing and the next being dispatched (ms).
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 100;

/// How long to wait for a single outcome before failing the case (ms).
pub const DEFAULT_OUTCOME_TIMEOUT_MS: u64 = 30_000;

/// Probability that a simulated case passes.
pub const DEFAULT_PASS_RATE: f64 = 0.7;

/// Queue depth of the outcome worker channel.
pub const DEFAULT_WORKER_QUEUE: usize = 16;

/// Simulated durations are drawn from `[MIN, MAX)` milliseconds.
pub const SIMULATED_DURATION_MIN_MS: u64 = 200;
pub const SIMULATED_DURATION_MAX_MS: u64 = 1200;

/// Simulated coverage is drawn from `[MIN, MAX)` percent.
pub const SIMULATED_COVERAGE_MIN: u32 = 70;
pub const SIMULATED_COVERAGE_MAX: u32 = 100;

// ============================================================================
// Export Defaults
// ============================================================================

/// Directory exported test files are written to.
pub const DEFAULT_EXPORT_DIR: &str = "generated-tests";

// ============================================================================
// Error Messages
// ============================================================================

/// Error recorded on a case whose outcome never arrived.
pub const TIMEOUT_ERROR: &str = "No outcome received before the timeout";

/// Fix suggestion recorded alongside [`TIMEOUT_ERROR`].
pub const TIMEOUT_FIX: &str = "Increase runner.outcome_timeout_ms or check the outcome source";

/// Fix suggestion recorded when the outcome source failed or broke its contract.
pub const SOURCE_FAILURE_FIX: &str = "Check the outcome source and run the suite again";
