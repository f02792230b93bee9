use serde::{Deserialize, Serialize};

use crate::history::HistoryEntry;
use crate::suite::TestSuite;

/// In-memory registry of suites and run history for one session.
///
/// Created when a session starts and cleared when it ends. Nothing is
/// persisted; use the export module to save generated files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionStore {
    suites: Vec<TestSuite>,
    history: Vec<HistoryEntry>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a suite and returns its id.
    pub fn insert_suite(&mut self, suite: TestSuite) -> String {
        let id = suite.id.clone();
        self.suites.push(suite);
        id
    }

    pub fn suite(&self, id: &str) -> Option<&TestSuite> {
        self.suites.iter().find(|s| s.id == id)
    }

    pub fn suite_mut(&mut self, id: &str) -> Option<&mut TestSuite> {
        self.suites.iter_mut().find(|s| s.id == id)
    }

    /// Suites in insertion order.
    pub fn suites(&self) -> &[TestSuite] {
        &self.suites
    }

    /// Removes a suite. History entries that refer to it are kept.
    pub fn remove_suite(&mut self, id: &str) -> Option<TestSuite> {
        let index = self.suites.iter().position(|s| s.id == id)?;
        Some(self.suites.remove(index))
    }

    pub fn push_history(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
    }

    /// History entries in the order runs completed.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn history_for<'a>(&'a self, suite_id: &'a str) -> impl Iterator<Item = &'a HistoryEntry> {
        self.history.iter().filter(move |h| h.suite_id == suite_id)
    }

    /// Drops all suites and history.
    pub fn clear(&mut self) {
        self.suites.clear();
        self.history.clear();
    }

    pub fn len(&self) -> usize {
        self.suites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }
}
