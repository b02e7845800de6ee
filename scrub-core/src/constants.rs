//! Shared constants for the scrub workspace.

/// The only analysis language the bundled detectors support.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Suffix appended to the input file stem for the default output path.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_redacted";

/// Extension of the default output file.
pub const DEFAULT_OUTPUT_EXTENSION: &str = "txt";
