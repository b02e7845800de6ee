use serde::{Deserialize, Serialize};

/// A labeled half-open byte range `[start, end)` into the analyzed text,
/// identifying one detected PII occurrence.
///
/// Offsets always refer to the *original* text, never to partially
/// redacted output. Invariant: `0 <= start < end <= text.len()`, with
/// both offsets on UTF-8 character boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    /// Category label, e.g. `EMAIL_ADDRESS` or `PERSON`.
    pub label: String,
    /// Identifier of the detector that produced this span.
    pub source: String,
}

impl Span {
    pub fn new(
        start: usize,
        end: usize,
        label: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            label: label.into(),
            source: source.into(),
        }
    }

    /// Length of the covered range in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether this span satisfies the offset invariant for a text of
    /// `text_len` bytes.
    pub fn is_valid_for(&self, text_len: usize) -> bool {
        self.start < self.end && self.end <= text_len
    }

    /// Whether two spans cover at least one common byte.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The placeholder token substituted for this span, e.g. `<PERSON>`.
    pub fn placeholder(&self) -> String {
        format!("<{}>", self.label)
    }
}
