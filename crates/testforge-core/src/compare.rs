//! Read-only views over the session store: suite comparison and run history.
//!
//! Unknown suite ids never produce errors here. A comparison with an
//! unresolved side is simply absent, and history rows for removed suites are
//! labelled [`UNKNOWN_SUITE`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::history::RunResults;
use crate::store::SessionStore;
use crate::suite::{TestStatus, TestSuite};

/// Label shown for history entries whose suite no longer exists.
pub const UNKNOWN_SUITE: &str = "Unknown suite";

/// Aggregate compared between two suites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    TotalTests,
    PassedTests,
    FailedTests,
    Coverage,
    Duration,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::TotalTests,
        Metric::PassedTests,
        Metric::FailedTests,
        Metric::Coverage,
        Metric::Duration,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Metric::TotalTests => "Total tests",
            Metric::PassedTests => "Passed",
            Metric::FailedTests => "Failed",
            Metric::Coverage => "Coverage %",
            Metric::Duration => "Duration ms",
        }
    }

    fn value(&self, suite: &TestSuite) -> i64 {
        match self {
            Metric::TotalTests => suite.total_tests as i64,
            Metric::PassedTests => suite.passed_tests as i64,
            Metric::FailedTests => suite.failed_tests as i64,
            Metric::Coverage => i64::from(suite.coverage),
            Metric::Duration => suite.duration_ms as i64,
        }
    }
}

/// One compared aggregate. `delta` is `right - left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricRow {
    pub metric: Metric,
    pub left: i64,
    pub right: i64,
    pub delta: i64,
}

/// Name and status of one case, for side-by-side listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStatus {
    pub name: String,
    pub status: TestStatus,
}

/// Structural diff of two suites' aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteComparison {
    pub left_id: String,
    pub left_name: String,
    pub right_id: String,
    pub right_name: String,
    pub rows: Vec<MetricRow>,
    pub left_cases: Vec<CaseStatus>,
    pub right_cases: Vec<CaseStatus>,
}

impl SuiteComparison {
    pub fn row(&self, metric: Metric) -> Option<&MetricRow> {
        self.rows.iter().find(|r| r.metric == metric)
    }
}

/// Compares two suites. Returns `None` if either id is unknown.
pub fn compare(store: &SessionStore, left_id: &str, right_id: &str) -> Option<SuiteComparison> {
    let left = store.suite(left_id)?;
    let right = store.suite(right_id)?;

    let rows = Metric::ALL
        .iter()
        .map(|metric| {
            let l = metric.value(left);
            let r = metric.value(right);
            MetricRow {
                metric: *metric,
                left: l,
                right: r,
                delta: r - l,
            }
        })
        .collect();

    Some(SuiteComparison {
        left_id: left.id.clone(),
        left_name: left.name.clone(),
        right_id: right.id.clone(),
        right_name: right.name.clone(),
        rows,
        left_cases: case_statuses(left),
        right_cases: case_statuses(right),
    })
}

fn case_statuses(suite: &TestSuite) -> Vec<CaseStatus> {
    suite
        .tests
        .iter()
        .map(|t| CaseStatus {
            name: t.name.clone(),
            status: t.status,
        })
        .collect()
}

/// A history entry joined with its suite's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub entry_id: String,
    pub suite_id: String,
    pub suite_name: String,
    pub timestamp: DateTime<Utc>,
    pub results: RunResults,
}

/// History in completion order, tolerating removed suites.
pub fn history_view(store: &SessionStore) -> Vec<HistoryRow> {
    store
        .history()
        .iter()
        .map(|entry| HistoryRow {
            entry_id: entry.id.clone(),
            suite_id: entry.suite_id.clone(),
            suite_name: store
                .suite(&entry.suite_id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| UNKNOWN_SUITE.to_string()),
            timestamp: entry.timestamp,
            results: entry.results,
        })
        .collect()
}
