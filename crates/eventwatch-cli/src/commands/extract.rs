//! Extract command

use chrono::Utc;
use clap::Args;
use eventwatch_engine::commands::extract::run_extract;

use super::{describe_event, CliResult, CommonArgs, SourceArgs};

#[derive(Debug, Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Print events as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ExtractArgs) -> CliResult {
    let (config, scope) = args.common.prepare()?;
    let source = args.source.source(&config)?;

    let outcome = run_extract(source.as_ref(), &scope, Utc::now())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.events)?);
        return Ok(());
    }
    for event in &outcome.events {
        println!("{}  {}", event.id, describe_event(event));
    }
    println!("{} events from {}", outcome.events.len(), outcome.url);
    Ok(())
}
