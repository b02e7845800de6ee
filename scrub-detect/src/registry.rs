//! Maps engine configuration to constructed detector instances.

use scrub_core::{
    constants, DetectorError, EngineKind, IDetector, ScrubConfig, ScrubError, ScrubResult,
};

use crate::heuristic::NameDetector;
use crate::patterns::PatternDetector;

/// Build the configured detector set, preserving configuration order
/// (the plan builder resolves exact-duplicate ranges in favor of the
/// earlier detector).
pub fn build_detectors(config: &ScrubConfig) -> ScrubResult<Vec<Box<dyn IDetector>>> {
    if config.language != constants::DEFAULT_LANGUAGE {
        return Err(ScrubError::UnsupportedLanguage {
            language: config.language.clone(),
        });
    }
    if config.engines.is_empty() {
        return Err(DetectorError::InitFailed {
            name: "registry".to_string(),
            reason: "no detection engines configured".to_string(),
        }
        .into());
    }

    let mut detectors: Vec<Box<dyn IDetector>> = Vec::with_capacity(config.engines.len());
    for engine in &config.engines {
        match engine {
            EngineKind::Pattern => detectors.push(Box::new(PatternDetector::new())),
            EngineKind::Heuristic => detectors.push(Box::new(NameDetector::new())),
        }
    }
    tracing::debug!(count = detectors.len(), "detector set built");
    Ok(detectors)
}
