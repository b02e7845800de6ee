//! # scrub-detect
//!
//! The detection engines behind scrub. Two independent detectors are
//! provided: a regex pattern registry covering structured PII (emails,
//! phone numbers, card numbers, ...) and a capitalization heuristic for
//! person names. Both implement `IDetector` from scrub-core and emit
//! spans with original-text offsets; resolving overlap between the two
//! is the plan builder's job, not theirs.

pub mod heuristic;
pub mod patterns;
pub mod registry;

pub use heuristic::NameDetector;
pub use patterns::PatternDetector;
pub use registry::build_detectors;
