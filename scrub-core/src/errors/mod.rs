mod detector_error;

pub use detector_error::DetectorError;

use std::path::PathBuf;

/// Top-level error type for one redaction run.
#[derive(Debug, thiserror::Error)]
pub enum ScrubError {
    #[error("cannot read input file {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write output file {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported language '{language}' (only 'en' is supported)")]
    UnsupportedLanguage { language: String },

    #[error(transparent)]
    Detector(#[from] DetectorError),
}

pub type ScrubResult<T> = Result<T, ScrubError>;
