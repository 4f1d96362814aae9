//! Timeout selection for remote calls.
//!
//! Every outbound call is tagged with exactly one category; the category
//! alone decides how long the call may wait. The table is static and not
//! overridable per call.

use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(30);
const QUESTION_TIMEOUT: Duration = Duration::from_secs(60);
const STATUS_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Tag selecting a timeout for a class of remote calls.
///
/// Upload and question answering involve backend compute proportional to
/// document size and model latency, so they get generous headroom. Status
/// checks must fail fast so the shell can reflect disconnection promptly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationCategory {
    Default,
    Upload,
    Question,
    StatusCheck,
}

impl OperationCategory {
    /// Maximum wait for a single attempt in this category.
    pub const fn timeout(self) -> Duration {
        match self {
            OperationCategory::Default => DEFAULT_TIMEOUT,
            OperationCategory::Upload => UPLOAD_TIMEOUT,
            OperationCategory::Question => QUESTION_TIMEOUT,
            OperationCategory::StatusCheck => STATUS_CHECK_TIMEOUT,
        }
    }
}
