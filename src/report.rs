//! Report projection of render attempts for the test reporter surface.

use serde::Serialize;

use crate::runner::RenderAttempt;

/// Serializable verdict for one render attempt.
///
/// `passed` derives solely from the attempt outcome; the snapshot is carried
/// along for inspection but never compared here.
#[derive(Debug, Clone, Serialize)]
pub struct TestReport {
    pub target: String,
    pub passed: bool,
    /// Error message, verbatim, when the attempt raised
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_snapshot: Option<String>,
}

impl TestReport {
    pub fn from_attempt(attempt: &RenderAttempt) -> Self {
        Self {
            target: attempt.target.clone(),
            passed: attempt.succeeded(),
            error: attempt.error().map(|e| e.message().to_string()),
            stack: attempt
                .error()
                .and_then(|e| e.stack().map(str::to_string)),
            style_snapshot: attempt.style_snapshot.clone(),
        }
    }

    /// One line in the classic test-runner format
    pub fn summary_line(&self) -> String {
        match &self.error {
            None => format!("PASS {}", self.target),
            Some(message) => format!("FAIL {}: {}", self.target, message),
        }
    }
}

/// Standard exit code for a batch of reports: 0 iff everything passed
pub fn exit_code(reports: &[TestReport]) -> i32 {
    if reports.iter().all(|r| r.passed) {
        0
    } else {
        1
    }
}
