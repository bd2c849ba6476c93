//! eventwatch engine - orchestration layer
//!
//! Wires the pure core to the outside world: page sources (HTTP or local
//! file), HTML decoding, TOML configuration and the check pipeline that
//! fetches, extracts, diffs and persists one run.

pub mod commands;
pub mod config;
pub mod errors;
pub mod html;
pub mod source;

pub use commands::check::{run_check, CheckOptions, CheckOutcome};
pub use commands::extract::{run_extract, ExtractOutcome};
pub use config::WatchConfig;
pub use errors::Result;
pub use source::{FetchedPage, FileSource, HttpSource, PageSource};
