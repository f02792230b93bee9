use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Suite aggregates captured at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResults {
    pub passed: usize,
    pub failed: usize,
    pub coverage: u32,
    pub duration_ms: u64,
}

/// A record of one completed suite run.
///
/// `suite_id` is a weak reference: the suite may have been removed since.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub suite_id: String,
    pub timestamp: DateTime<Utc>,
    pub results: RunResults,
}

impl HistoryEntry {
    pub fn new(suite_id: impl Into<String>, results: RunResults) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            suite_id: suite_id.into(),
            timestamp: Utc::now(),
            results,
        }
    }
}
