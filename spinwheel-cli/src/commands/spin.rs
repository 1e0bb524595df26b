use super::{print_segments, seeded_rng, ConsoleObserver, RosterArgs};
use crate::config::CliConfig;
use parking_lot::Mutex;
use spinwheel_core::celebration::{plan_celebration, schedule_celebration, Burst, Frame};
use spinwheel_core::{generate_roster, spin_once, SegmentTable};
use std::sync::Arc;

const CELEBRATION_BURSTS: usize = 20;

/// Stand-in for the scene that shows celebration bursts
#[derive(Default)]
struct Stage {
    shown: Mutex<Vec<Burst>>,
}

pub async fn spin(
    cli_config: &CliConfig,
    args: &RosterArgs,
    seed: Option<u64>,
    json: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    let config = cli_config.wheel_config()?;
    let mut rng = seeded_rng(seed);

    let roster = generate_roster(usize::from(args.players), args.tickets, &mut rng);
    if !json {
        print_segments(&SegmentTable::new(roster.clone()));
    }

    let observer = ConsoleObserver { quiet: json };
    let report = spin_once(&config, roster, observer, &mut rng)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Settled after {:.1}s at {:.1}°",
        report.elapsed,
        report.pointer_angle.to_degrees()
    );

    if quiet || report.winner.is_none() {
        return Ok(());
    }

    let stage = Arc::new(Stage::default());
    let plan = plan_celebration(CELEBRATION_BURSTS, Frame::centered(80.0, 24.0), &mut rng);
    let handles = schedule_celebration(&stage, plan, |stage, burst| {
        println!("  * {:?} burst at ({:.0}, {:.0})", burst.color, burst.x, burst.y);
        stage.shown.lock().push(burst);
    });

    for handle in handles {
        handle.await?;
    }
    tracing::debug!("Celebration showed {} bursts", stage.shown.lock().len());

    Ok(())
}
