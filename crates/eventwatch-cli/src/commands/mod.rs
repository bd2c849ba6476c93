//! Subcommand implementations and the plumbing they share.

pub mod check;
pub mod extract;
pub mod log;
pub mod removed;

use clap::Args;
use eventwatch_core::logging_facility;
use eventwatch_core::model::Event;
use eventwatch_core::Scope;
use eventwatch_engine::config::{WatchConfig, DEFAULT_CONFIG_FILE};
use eventwatch_engine::source::{FileSource, HttpSource, PageSource};
use eventwatch_store::FsSnapshotStore;
use std::path::{Path, PathBuf};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Flags shared by every subcommand that touches config or storage.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Config file (default: ./eventwatch.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Two-letter state code, or "all"
    #[arg(long, default_value = "all")]
    pub state: String,

    /// Snapshot directory (overrides store.data_dir)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

/// Where to read the listing from; falls back to `source.url` in config.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Listing page URL
    #[arg(long, conflicts_with = "file")]
    pub url: Option<String>,

    /// Local listing file (.html/.htm is decoded, anything else read as text)
    #[arg(long, conflicts_with = "url")]
    pub file: Option<PathBuf>,
}

impl CommonArgs {
    /// Load config, start logging and parse the scope.
    pub fn prepare(&self) -> Result<(WatchConfig, Scope), Box<dyn std::error::Error>> {
        let config = match &self.config {
            Some(path) => WatchConfig::load(path)?,
            None => WatchConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE)),
        };
        logging_facility::init(config.logging_profile());
        let scope = Scope::parse(&self.state)?;
        Ok((config, scope))
    }

    pub fn store(&self, config: &WatchConfig) -> FsSnapshotStore {
        let dir = self
            .data_dir
            .clone()
            .unwrap_or_else(|| config.store.data_dir.clone());
        FsSnapshotStore::new(dir)
    }
}

impl SourceArgs {
    pub fn source(&self, config: &WatchConfig) -> Result<Box<dyn PageSource>, Box<dyn std::error::Error>> {
        if let Some(path) = &self.file {
            return Ok(Box::new(FileSource::new(path)));
        }
        let url = self
            .url
            .clone()
            .or_else(|| config.source.url.clone())
            .ok_or("No listing source: pass --url or --file, or set source.url in the config")?;
        Ok(Box::new(HttpSource::new(
            url,
            config.source.timeout_secs,
            &config.source.user_agent,
        )?))
    }
}

/// One-line rendering used by every text listing.
pub fn describe_event(event: &Event) -> String {
    let mut line = format!("[{}] {}", event.state, event.title);
    if let Some(city) = &event.city {
        line.push_str(" - ");
        line.push_str(city);
    }
    if !event.date_text.is_empty() {
        line.push_str(&format!(" ({})", event.date_text));
    }
    line
}
