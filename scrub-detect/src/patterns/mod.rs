pub mod pii;
mod validators;

use scrub_core::{IDetector, ScrubResult, Span};

pub use validators::luhn_valid;

/// Identifier used as `Span::source` for pattern matches.
pub const SOURCE: &str = "pattern";

/// Regex-based detector for structured PII.
///
/// Patterns that failed to compile at first use degrade to "no matches"
/// (`LazyLock<Option<Regex>> = None`) instead of aborting the run; each
/// failure is logged once at construction.
pub struct PatternDetector;

impl PatternDetector {
    pub fn new() -> Self {
        for pat in pii::all_patterns() {
            if pat.regex.is_none() {
                tracing::warn!(pattern = pat.name, "pattern failed to compile, disabled");
            }
        }
        Self
    }
}

impl Default for PatternDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl IDetector for PatternDetector {
    fn name(&self) -> &'static str {
        SOURCE
    }

    fn detect(&self, text: &str) -> ScrubResult<Vec<Span>> {
        let mut matches = Vec::new();

        for pat in pii::all_patterns() {
            let Some(re) = pat.regex.as_ref() else { continue };
            for m in re.find_iter(text) {
                if pat.name == "credit_card" && !luhn_valid(m.as_str()) {
                    continue;
                }
                matches.push(Span::new(m.start(), m.end(), pat.label, SOURCE));
            }
        }

        Ok(resolve_own_overlaps(matches))
    }
}

/// A single detector must emit non-overlapping spans. Patterns overlap
/// each other routinely (a URL containing what looks like an email, a
/// passport number inside a longer license number), so keep the
/// earliest match, breaking start ties in favor of the longer one.
fn resolve_own_overlaps(mut matches: Vec<Span>) -> Vec<Span> {
    matches.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut kept: Vec<Span> = Vec::with_capacity(matches.len());
    for m in matches {
        match kept.last() {
            Some(last) if m.start < last.end => {}
            _ => kept.push(m),
        }
    }
    kept
}
