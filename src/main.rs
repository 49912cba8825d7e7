//! Mejenga Stats CLI
//!
//! Season statistics for amateur soccer matches.
//! Reads match exports and produces season reports, history and award tallies.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use mejenga_stats::commands::{
    display_schema, display_version, execute_history, execute_season, execute_seasons,
    execute_votes, validate_args, validate_matches_file, HistoryArgs, SeasonArgs, VotesArgs,
};
use mejenga_stats::utils::config::DEFAULT_REPORT_PATH;

/// Mejenga Stats - season statistics for amateur soccer
#[derive(Parser, Debug)]
#[command(name = "mejenga-stats")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute statistics for a season
    Season {
        /// Match export (JSON)
        #[arg(short, long, env = "MEJENGAS_MATCHES")]
        input: PathBuf,

        /// Season year (defaults to every match in the file)
        #[arg(short, long)]
        year: Option<i32>,

        /// Output path for the JSON season report (placed in artifacts/ by default)
        #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
        output: PathBuf,

        /// Aggregation config (TOML)
        #[arg(short, long, env = "MEJENGAS_CONFIG")]
        config: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// List the seasons in a match export
    Seasons {
        /// Match export (JSON)
        #[arg(short, long, env = "MEJENGAS_MATCHES")]
        input: PathBuf,
    },

    /// Show the match history
    History {
        /// Match export (JSON)
        #[arg(short, long, env = "MEJENGAS_MATCHES")]
        input: PathBuf,

        /// Season year (defaults to every match in the file)
        #[arg(short, long)]
        year: Option<i32>,

        /// Maximum number of matches to show
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Tally the Balón de Oro votes
    Votes {
        /// Vote export (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Award year
        #[arg(short, long)]
        year: i32,
    },

    /// Validate a match export
    Validate {
        /// Path to match JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Season {
            input,
            year,
            mut output,
            config,
            summary,
        } => {
            // Ensure the report goes to artifacts/ if no directory is specified
            if output.parent().map(|p| p.as_os_str().is_empty()).unwrap_or(true) {
                output = PathBuf::from("artifacts").join(&output);
            }

            let args = SeasonArgs {
                input,
                year,
                output: Some(output),
                config,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_season(args)?;
        }

        Commands::Seasons { input } => {
            execute_seasons(&input)?;
        }

        Commands::History { input, year, limit } => {
            execute_history(HistoryArgs { input, year, limit })?;
        }

        Commands::Votes { input, year } => {
            execute_votes(VotesArgs { input, year })?;
        }

        Commands::Validate { file } => {
            validate_matches_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
