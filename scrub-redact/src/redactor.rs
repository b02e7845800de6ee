use scrub_core::{DetectorError, IDetector, RedactedText, ScrubResult, Span};

use crate::plan::build_plan;

/// Runs the configured detectors over a text and applies the merged
/// redaction plan.
///
/// Detector failures are best-effort: a failing detector is logged and
/// skipped while at least one other detector succeeds; the run fails
/// only when every detector does. An empty plan (no PII found) is a
/// success and returns the input unchanged.
pub struct Redactor {
    detectors: Vec<Box<dyn IDetector>>,
}

impl Redactor {
    pub fn new(detectors: Vec<Box<dyn IDetector>>) -> Self {
        Self { detectors }
    }

    pub fn redact(&self, text: &str) -> ScrubResult<RedactedText> {
        let mut candidates = Vec::new();
        let mut failures = 0usize;

        for detector in &self.detectors {
            match detector.detect(text) {
                Ok(spans) => {
                    tracing::debug!(
                        detector = detector.name(),
                        spans = spans.len(),
                        "detection complete"
                    );
                    candidates.extend(spans);
                }
                Err(e) => {
                    failures += 1;
                    tracing::warn!(
                        detector = detector.name(),
                        error = %e,
                        "detector failed, continuing with remaining detectors"
                    );
                }
            }
        }

        if failures > 0 && failures == self.detectors.len() {
            return Err(DetectorError::AllDetectorsFailed {
                attempted: failures,
            }
            .into());
        }

        let plan = build_plan(candidates, text.len());
        let text = apply_plan(text, &plan);
        Ok(RedactedText { text, plan })
    }
}

/// Apply a non-overlapping plan, replacing each span with `<LABEL>`.
///
/// Substitution runs right to left so placeholder length differences
/// never shift the offsets of spans still pending. Plan spans carry
/// original-text offsets and must already be ordered and disjoint,
/// which `build_plan` guarantees.
pub fn apply_plan(text: &str, plan: &[Span]) -> String {
    let mut result = text.to_string();
    for span in plan.iter().rev() {
        result.replace_range(span.start..span.end, &span.placeholder());
    }
    result
}
