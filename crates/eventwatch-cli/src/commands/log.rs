//! Change log command

use clap::Args;
use eventwatch_store::SnapshotStore;

use super::{CliResult, CommonArgs};

#[derive(Debug, Args)]
pub struct LogArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Show at most this many entries, newest first
    #[arg(long, default_value_t = 20)]
    pub limit: usize,

    /// Print entries as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: LogArgs) -> CliResult {
    let (config, scope) = args.common.prepare()?;
    let store = args.common.store(&config);

    let Some(snapshot) = store.load(&scope)? else {
        println!("No snapshot for scope {} yet; run `eventwatch check` first", scope);
        return Ok(());
    };
    let entries = snapshot.change_log_view(Some(args.limit));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    if entries.is_empty() {
        println!("No changes recorded for scope {}", scope);
        return Ok(());
    }
    for change in entries {
        println!(
            "{}  {:<13} {}  {:?} -> {:?}",
            change.detected_at.format("%Y-%m-%d %H:%M"),
            change.change_type.as_str(),
            change.event_id,
            change.old_value,
            change.new_value
        );
    }
    Ok(())
}
