//! # scrub-redact
//!
//! The span merger and redactor. Takes the candidate spans from any
//! number of detectors, merges them into one deterministic
//! non-overlapping redaction plan, and applies the plan to the text as
//! a single substitution pass. Pure text-to-text; file handling lives
//! in the CLI crate.

pub mod plan;
pub mod redactor;

pub use plan::build_plan;
pub use redactor::{apply_plan, Redactor};
