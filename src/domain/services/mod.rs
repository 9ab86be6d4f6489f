//! Domain Services
//!
//! Stateless rules with no I/O.

pub mod classifier;

pub use classifier::{classify, is_quiet, looks_not_installed, OutputPatterns, Verdict};
