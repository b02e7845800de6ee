/// Detector-layer errors. A single failing detector is tolerated while
/// another one succeeds; these become fatal only when nothing succeeds.
#[derive(Debug, thiserror::Error)]
pub enum DetectorError {
    #[error("detector '{name}' failed to initialize: {reason}")]
    InitFailed { name: String, reason: String },

    #[error("detector '{name}' failed during analysis: {reason}")]
    AnalysisFailed { name: String, reason: String },

    #[error("all {attempted} configured detectors failed")]
    AllDetectorsFailed { attempted: usize },
}
