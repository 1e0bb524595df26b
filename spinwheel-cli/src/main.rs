mod commands;
mod config;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "spinwheel")]
#[command(about = "Weighted prize wheel - spin it and see who wins")]
#[command(version)]
struct Cli {
    /// Path to a JSON wheel configuration
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a roster and spin the wheel once
    Spin {
        #[command(flatten)]
        roster: commands::RosterArgs,
        /// Seed for the roster and the spin impulse
        #[arg(long)]
        seed: Option<u64>,
        /// Print the spin report as JSON
        #[arg(long)]
        json: bool,
        /// Skip the celebration after a win
        #[arg(long)]
        quiet: bool,
    },
    /// Show how the wheel is split for a list of ticket counts
    Segments {
        /// Ticket counts in roster order, e.g. 30,10,0
        #[arg(long, value_delimiter = ',', required = true)]
        tickets: Vec<u32>,
    },
    /// Spin repeatedly on one roster
    Play {
        #[command(flatten)]
        roster: commands::RosterArgs,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "spinwheel={},spinwheel_core={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli_config = config::CliConfig::resolve(cli.config);

    let result = match cli.command {
        Commands::Spin {
            roster,
            seed,
            json,
            quiet,
        } => commands::spin(&cli_config, &roster, seed, json, quiet).await,
        Commands::Segments { tickets } => commands::show_segments(&tickets),
        Commands::Play { roster, seed } => commands::play(&cli_config, &roster, seed),
        Commands::Config => commands::show_config(&cli_config),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
