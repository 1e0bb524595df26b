mod play;
mod segments;
mod spin;

pub use play::play;
pub use segments::show_segments;
pub use spin::spin;

use crate::config::CliConfig;
use clap::Args;
use comfy_table::{presets::UTF8_FULL, Table};
use rand::rngs::StdRng;
use rand::SeedableRng;
use spinwheel_core::{Player, SegmentTable, SpinObserver};

#[derive(Args, Debug, Clone)]
pub struct RosterArgs {
    /// Number of players on the wheel
    #[arg(short, long, default_value_t = 6, value_parser = clap::value_parser!(u16).range(1..=64))]
    pub players: u16,

    /// Hand out random ticket counts instead of an even split
    #[arg(short, long)]
    pub tickets: bool,
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub(crate) fn print_segments(table: &SegmentTable) {
    let mut out = Table::new();
    out.load_preset(UTF8_FULL);
    out.set_header(vec!["#", "Player", "Tickets", "Start", "End", "Share"]);

    for (segment, player) in table.iter() {
        out.add_row(vec![
            (segment.owner() + 1).to_string(),
            player.name().to_string(),
            player.tickets().to_string(),
            format!("{:.1}°", segment.start_angle().to_degrees()),
            format!("{:.1}°", segment.end_angle().to_degrees()),
            format!("{:.1}%", segment.width() / std::f64::consts::TAU * 100.0),
        ]);
    }

    println!("{}", out);
}

pub(crate) fn announce_winner(winner: Option<&Player>) {
    match winner {
        Some(player) => {
            println!();
            println!("Congratulations!");
            println!("{}", player.name());
            println!("has won!");
        }
        None => {
            println!("Oops. It looks like there was an error. Go ahead and spin again.");
        }
    }
}

/// Prints the spin lifecycle to the terminal
pub(crate) struct ConsoleObserver {
    pub quiet: bool,
}

impl SpinObserver for ConsoleObserver {
    fn on_spin_began(&mut self) {
        if !self.quiet {
            println!("Spinning...");
        }
    }

    fn on_spin_ended(&mut self, winner: Option<&Player>) {
        if !self.quiet {
            announce_winner(winner);
        }
    }
}

pub fn show_config(cli_config: &CliConfig) -> anyhow::Result<()> {
    let config = cli_config.wheel_config()?;

    if let Some(path) = &cli_config.config_path {
        println!("Config path: {}", path.display());
    }
    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}
