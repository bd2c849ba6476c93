//! Check command

use chrono::Utc;
use clap::Args;
use eventwatch_core::model::{Event, EventChange};
use eventwatch_engine::commands::check::{run_check, CheckOptions, CheckOutcome};
use serde::Serialize;

use super::{describe_event, CliResult, CommonArgs, SourceArgs};

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Diff and report without saving the snapshot
    #[arg(long)]
    pub dry_run: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    run_id: &'a str,
    scope: String,
    first_run: bool,
    saved: bool,
    event_count: usize,
    new_events: &'a [Event],
    removed_events: &'a [Event],
    changes: &'a [EventChange],
}

pub fn execute(args: CheckArgs) -> CliResult {
    let (config, scope) = args.common.prepare()?;
    let store = args.common.store(&config);
    let source = args.source.source(&config)?;

    let options = CheckOptions {
        now: Utc::now(),
        dry_run: args.dry_run,
        retention: config.retention_policy(),
    };
    let outcome = run_check(source.as_ref(), &store, &scope, &options)?;

    if args.json {
        let report = CheckReport {
            run_id: outcome.run_id.as_str(),
            scope: outcome.scope.to_string(),
            first_run: outcome.first_run,
            saved: outcome.saved,
            event_count: outcome.event_count,
            new_events: &outcome.new_events,
            removed_events: &outcome.removed_events,
            changes: &outcome.field_changes,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&outcome);
    }
    Ok(())
}

fn print_text(outcome: &CheckOutcome) {
    if outcome.first_run {
        println!(
            "First run for scope {}: {} events recorded",
            outcome.scope, outcome.event_count
        );
    } else {
        println!(
            "Scope {}: {} events, {} new, {} removed, {} changed",
            outcome.scope,
            outcome.event_count,
            outcome.new_events.len(),
            outcome.removed_events.len(),
            outcome.field_changes.len()
        );
        for event in &outcome.new_events {
            println!("  + {}", describe_event(event));
        }
        for event in &outcome.removed_events {
            println!("  - {}", describe_event(event));
        }
        for change in &outcome.field_changes {
            println!(
                "  ~ {} {}: {:?} -> {:?}",
                change.event_id, change.change_type, change.old_value, change.new_value
            );
        }
    }
    if !outcome.saved {
        println!("Dry run: snapshot not saved");
    }
}
