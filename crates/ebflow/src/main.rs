mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ebflow")]
#[command(about = "Synthesize a hosting environment and deployment pipeline from settings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize the resource graph
    Synth {
        /// Settings file (defaults to discovery: EBFLOW_CONFIG_PATH, then
        /// ebflow.yaml candidates)
        #[arg(short, long, env = "EBFLOW_CONFIG_PATH")]
        config: Option<PathBuf>,
        /// Write the graph to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Validate the settings and report what would be synthesized
    Validate {
        /// Settings file (defaults to discovery)
        #[arg(short, long, env = "EBFLOW_CONFIG_PATH")]
        config: Option<PathBuf>,
    },
    /// Print version information
    Version,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Synth {
            config,
            out,
            pretty,
        } => commands::synth::handle(config, out, pretty),
        Commands::Validate { config } => commands::validate::handle(config),
        Commands::Version => {
            println!("ebflow {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
