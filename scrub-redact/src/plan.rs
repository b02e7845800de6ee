//! Redaction plan construction.
//!
//! Candidates from all detectors are merged into one ordered,
//! non-overlapping span list. The selection rule is deterministic for a
//! fixed input and detector configuration:
//!
//! 1. sort by `start` ascending, ties by `end` descending (the longer
//!    span wins at equal start);
//! 2. exact-duplicate ranges keep their input order, which is detector
//!    configuration order, so the earlier-configured detector wins;
//! 3. sweep left to right, accepting a candidate only when it starts at
//!    or after the end of the last accepted span.

use scrub_core::Span;

/// Merge candidate spans into a non-overlapping redaction plan.
///
/// Spans violating the offset invariant for a text of `text_len` bytes
/// are dropped up front rather than corrupting the sweep.
pub fn build_plan(mut candidates: Vec<Span>, text_len: usize) -> Vec<Span> {
    candidates.retain(|s| s.is_valid_for(text_len));

    // Stable sort: equal (start, end) pairs keep concatenation order.
    candidates.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut plan: Vec<Span> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        match plan.last() {
            Some(last) if candidate.start < last.end => {
                tracing::debug!(
                    start = candidate.start,
                    end = candidate.end,
                    label = %candidate.label,
                    "candidate overlaps accepted span, dropped"
                );
            }
            _ => plan.push(candidate),
        }
    }
    plan
}
