//! File-level pipeline: read the input, run detection and redaction,
//! write the output. One file per invocation; nothing is held open
//! beyond this function.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use scrub_core::{constants, ScrubConfig, ScrubError, ScrubResult};
use scrub_detect::build_detectors;
use scrub_redact::Redactor;

/// Summary of one completed run.
#[derive(Debug)]
pub struct RunReport {
    pub output_path: PathBuf,
    pub redactions: usize,
    /// Redaction counts per category label, sorted by label.
    pub counts: BTreeMap<String, usize>,
}

/// Default output path: `<input-dir>/<input-stem>_redacted.txt`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let file_name = format!(
        "{stem}{}.{}",
        constants::DEFAULT_OUTPUT_SUFFIX,
        constants::DEFAULT_OUTPUT_EXTENSION
    );
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(file_name),
        _ => PathBuf::from(file_name),
    }
}

/// Process one file end to end.
pub fn run(input: &Path, output: Option<&Path>, config: &ScrubConfig) -> ScrubResult<RunReport> {
    let text = std::fs::read_to_string(input).map_err(|source| ScrubError::Input {
        path: input.to_path_buf(),
        source,
    })?;

    let detectors = build_detectors(config)?;
    let redactor = Redactor::new(detectors);
    let redacted = redactor.redact(&text)?;

    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input));
    std::fs::write(&output_path, &redacted.text).map_err(|source| ScrubError::Output {
        path: output_path.clone(),
        source,
    })?;

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for span in &redacted.plan {
        *counts.entry(span.label.clone()).or_insert(0) += 1;
    }

    Ok(RunReport {
        output_path,
        redactions: redacted.plan.len(),
        counts,
    })
}
