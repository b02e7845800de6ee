use serde::{Deserialize, Serialize};

use crate::errors::ScrubResult;
use crate::span::Span;

/// Result of one full redaction pass: the rewritten text plus the plan
/// that was applied (spans carry original-text offsets).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactedText {
    pub text: String,
    pub plan: Vec<Span>,
}

/// A PII detection engine.
///
/// One invocation scans the full input text and returns every span the
/// engine recognizes. Spans from a single detector must not overlap each
/// other; overlap across detectors is resolved downstream by the plan
/// builder.
pub trait IDetector: Send + Sync {
    /// Stable identifier used as `Span::source` and in log output.
    fn name(&self) -> &'static str;

    /// Scan `text` and return detected spans in any order.
    fn detect(&self, text: &str) -> ScrubResult<Vec<Span>>;
}

impl std::fmt::Debug for dyn IDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IDetector").field("name", &self.name()).finish()
    }
}
