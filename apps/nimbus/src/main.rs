//! Nimbus binary entry point.

use clap::{Parser, Subcommand};
use nimbus::cli::{cmd_export, cmd_list, cmd_show};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "nimbus",
    version,
    about = "Star chart for the community systems sheet"
)]
struct Cli {
    /// Path to the CSV export of the systems sheet
    #[arg(long, global = true, default_value = "systems.csv")]
    data: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every system with tier, level, station, and ore summary
    List {
        /// Emit the whole chart as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the full detail view for one system
    Show {
        /// System name (chart key)
        name: String,
        /// Emit the system as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Serialize the translated chart as JSON
    Export {
        /// Output file; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::List { json } => cmd_list(&cli.data, json),
        Command::Show { name, json } => cmd_show(&cli.data, &name, json),
        Command::Export { output } => cmd_export(&cli.data, output.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "command failed");
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
