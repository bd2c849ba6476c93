//! Removed-events command

use clap::Args;
use eventwatch_core::snapshot::RemovedEntry;
use eventwatch_store::SnapshotStore;

use super::{describe_event, CliResult, CommonArgs};

#[derive(Debug, Args)]
pub struct RemovedArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print entries as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: RemovedArgs) -> CliResult {
    let (config, scope) = args.common.prepare()?;
    let store = args.common.store(&config);

    let Some(snapshot) = store.load(&scope)? else {
        println!("No snapshot for scope {} yet; run `eventwatch check` first", scope);
        return Ok(());
    };
    let mut entries: Vec<&RemovedEntry> = snapshot.removed_events.values().collect();
    entries.sort_by(|a, b| b.removed_at.cmp(&a.removed_at).then_with(|| a.event.id.cmp(&b.event.id)));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    if entries.is_empty() {
        println!("No removed events archived for scope {}", scope);
        return Ok(());
    }
    for entry in entries {
        println!(
            "{}  {}  {}",
            entry.removed_at.format("%Y-%m-%d %H:%M"),
            entry.event.id,
            describe_event(&entry.event)
        );
    }
    Ok(())
}
