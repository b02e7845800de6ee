//! Library surface of the scrub binary: the file-processing pipeline,
//! exposed so integration tests can drive it without spawning the
//! executable.

pub mod process;
