//! Progress and results of one bulk job

use serde::Serialize;

use crate::domain::InstallOutcome;
use crate::error::PipdeckError;

/// Outcome of one manifest entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryResult {
    pub entry: String,
    pub success: bool,
    /// "installed", "already installed", or the failure message
    pub detail: String,
}

/// State of a running or finished bulk job.
///
/// `completed` only grows and never exceeds `total`; each entry is recorded
/// exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkJobState {
    total: usize,
    completed: usize,
    current_index: usize,
    results: Vec<EntryResult>,
}

impl BulkJobState {
    pub(crate) fn new(total: usize) -> Self {
        Self {
            total,
            completed: 0,
            current_index: 0,
            results: Vec::with_capacity(total),
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Index of the entry being (or last) processed
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn results(&self) -> &[EntryResult] {
        &self.results
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }

    pub fn is_finished(&self) -> bool {
        self.completed == self.total
    }

    /// Percent complete, 0 to 100. An empty job is complete.
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }

    pub(crate) fn start_entry(&mut self, index: usize) {
        self.current_index = index;
    }

    /// Record the outcome of the current entry
    pub(crate) fn record(
        &mut self,
        entry: &str,
        outcome: &std::result::Result<InstallOutcome, PipdeckError>,
    ) {
        debug_assert!(self.completed < self.total);
        let (success, detail) = match outcome {
            Ok(outcome) => (true, outcome.to_string()),
            Err(e) => (false, e.to_string()),
        };
        self.results.push(EntryResult {
            entry: entry.to_string(),
            success,
            detail,
        });
        self.completed = (self.completed + 1).min(self.total);
    }
}
