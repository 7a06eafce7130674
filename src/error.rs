//! Error types for the conformance-test core.
//!
//! Two severities exist. Critical errors abort construction of one resource
//! schema during discovery and are not retryable. Validation failures are
//! aggregated over a full attribute walk and are always locally recoverable:
//! callers convert them into a single failed test result and continue with
//! the next sub-test.

use crate::assertions::AssertionLog;
use crate::exchange::HttpExchange;

/// Main error type for conformance-core operations.
#[derive(Debug, thiserror::Error)]
pub enum ComplianceError {
    /// Malformed or incomplete schema metadata during discovery.
    ///
    /// Aborts construction of the affected resource schema only; schemas
    /// registered from earlier discovery documents remain intact.
    #[error("schema construction failed: {message}")]
    CriticalSchema {
        message: String,
        /// Name of the offending attribute, when one could be determined
        attribute: Option<String>,
        /// Full discovery exchange for diagnostics
        exchange: Box<HttpExchange>,
    },

    /// One or more validation checks failed for a resource instance.
    ///
    /// Raised once, after the full attribute walk completes, bundling the
    /// accumulated assertion log and the exchange that produced the resource.
    #[error("{failed} of {total} validation check(s) failed")]
    ValidationFailed {
        failed: usize,
        total: usize,
        log: AssertionLog,
        exchange: Box<HttpExchange>,
    },

    /// JSON parse errors from discovery or instance plumbing
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ComplianceError {
    /// Create a critical schema-construction error.
    pub fn critical_schema(
        message: impl Into<String>,
        attribute: Option<String>,
        exchange: &HttpExchange,
    ) -> Self {
        Self::CriticalSchema {
            message: message.into(),
            attribute,
            exchange: Box::new(exchange.clone()),
        }
    }

    /// Create an aggregated validation failure from a completed walk.
    ///
    /// `failed` and `total` count the checks of this validation pass only;
    /// the bundled log may additionally hold records from earlier sub-tests
    /// when the caller reuses one log across a test case.
    pub fn validation_failed(
        failed: usize,
        total: usize,
        log: &AssertionLog,
        exchange: &HttpExchange,
    ) -> Self {
        Self::ValidationFailed {
            failed,
            total,
            log: log.clone(),
            exchange: Box::new(exchange.clone()),
        }
    }

    /// True for errors a test driver should catch, record as one failed
    /// sub-test, and move past.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::ValidationFailed { .. })
    }
}

/// Result type alias for conformance-core operations.
pub type ComplianceResult<T> = Result<T, ComplianceError>;
