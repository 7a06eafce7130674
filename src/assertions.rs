//! Ordered assertion log shared by schema construction and validation.
//!
//! Every individual check performed by the core appends exactly one
//! structured record, in evaluation order. External report generation
//! consumes the log as-is; nothing in the core ever removes or reorders
//! records.

use serde::{Deserialize, Serialize};

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckStatus {
    /// The check held
    Success,
    /// The check did not hold
    Failed,
    /// The check was not executed by the driver
    Skipped,
}

/// One structured assertion record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssertionRecord {
    /// What was checked, e.g. "Required attribute 'userName' is present"
    pub description: String,
    /// Observed state of the instance or metadata
    pub actual: String,
    /// State the schema called for
    pub expected: String,
    /// Verdict for this one check
    pub status: CheckStatus,
}

/// Append-only, evaluation-ordered collection of assertion records.
///
/// Exclusively owned by the single calling thread for the duration of one
/// validation pass; there is no interior locking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssertionLog {
    records: Vec<AssertionRecord>,
}

impl AssertionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record, preserving evaluation order.
    pub fn push(&mut self, record: AssertionRecord) {
        self.records.push(record);
    }

    /// Append a successful check.
    pub fn pass(
        &mut self,
        description: impl Into<String>,
        actual: impl Into<String>,
        expected: impl Into<String>,
    ) {
        self.push(AssertionRecord {
            description: description.into(),
            actual: actual.into(),
            expected: expected.into(),
            status: CheckStatus::Success,
        });
    }

    /// Append a failed check.
    pub fn fail(
        &mut self,
        description: impl Into<String>,
        actual: impl Into<String>,
        expected: impl Into<String>,
    ) {
        self.push(AssertionRecord {
            description: description.into(),
            actual: actual.into(),
            expected: expected.into(),
            status: CheckStatus::Failed,
        });
    }

    /// Records in evaluation order.
    pub fn records(&self) -> &[AssertionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of failed checks in the log.
    pub fn failed_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.status == CheckStatus::Failed)
            .count()
    }

    /// True when no check in the log failed.
    pub fn all_passed(&self) -> bool {
        self.failed_count() == 0
    }
}

impl IntoIterator for AssertionLog {
    type Item = AssertionRecord;
    type IntoIter = std::vec::IntoIter<AssertionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a AssertionLog {
    type Item = &'a AssertionRecord;
    type IntoIter = std::slice::Iter<'a, AssertionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
