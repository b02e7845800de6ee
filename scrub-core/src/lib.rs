//! # scrub-core
//!
//! Foundation crate for the scrub redaction tool.
//! Defines the span model, detector traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod span;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{EngineKind, ScrubConfig};
pub use errors::{DetectorError, ScrubError, ScrubResult};
pub use span::Span;
pub use traits::{IDetector, RedactedText};
