use serde::{Deserialize, Serialize};

use crate::constants;

/// Which detection engine(s) to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Regex pattern registry (emails, phones, SSNs, ...).
    Pattern,
    /// Capitalization-based person-name heuristics.
    Heuristic,
}

/// Configuration for one redaction run.
///
/// `engines` order matters: candidate spans are concatenated in this
/// order, so the earlier engine wins ties on identical ranges.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrubConfig {
    pub engines: Vec<EngineKind>,
    /// BCP-47-ish language tag understood by the detectors.
    pub language: String,
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            engines: vec![EngineKind::Pattern, EngineKind::Heuristic],
            language: constants::DEFAULT_LANGUAGE.to_string(),
        }
    }
}
