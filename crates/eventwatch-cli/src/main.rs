//! eventwatch CLI
//!
//! Command-line interface for watching an event listing page for changes

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "eventwatch")]
#[command(about = "eventwatch - change detection for scraped event listings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the listing, diff against the last run and save the new snapshot
    Check(commands::check::CheckArgs),
    /// Fetch and print extracted events without diffing
    Extract(commands::extract::ExtractArgs),
    /// Show recent field changes from the change log
    Log(commands::log::LogArgs),
    /// Show events archived as removed
    Removed(commands::removed::RemovedArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check(args) => commands::check::execute(args),
        Commands::Extract(args) => commands::extract::execute(args),
        Commands::Log(args) => commands::log::execute(args),
        Commands::Removed(args) => commands::removed::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
