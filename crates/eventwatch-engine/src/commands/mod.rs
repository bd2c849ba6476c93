//! Command orchestration layer.
//!
//! Each command owns one operation boundary: it logs start/end through the
//! core's logging macros and stamps any error with the run context.

pub mod check;
pub mod extract;
