use super::{print_segments, seeded_rng, ConsoleObserver, RosterArgs};
use crate::config::CliConfig;
use dialoguer::Confirm;
use spinwheel_core::{generate_roster, DampedWheel, SegmentTable, Simulation, SpinController};

pub fn play(cli_config: &CliConfig, args: &RosterArgs, seed: Option<u64>) -> anyhow::Result<()> {
    let config = cli_config.wheel_config()?;
    let mut rng = seeded_rng(seed);

    let roster = generate_roster(usize::from(args.players), args.tickets, &mut rng);
    let table = SegmentTable::new(roster);
    print_segments(&table);

    let simulation = Simulation::new(&config.physics);
    let mut body = DampedWheel::new(&config.physics);
    let mut controller = SpinController::new(config, table, ConsoleObserver { quiet: false }, rng)?;

    let mut spins = 0u32;
    while Confirm::new()
        .with_prompt("Spin the wheel?")
        .default(true)
        .interact()?
    {
        controller.spin(&mut body);
        let (elapsed, _) = simulation.run(&mut controller, &mut body)?;
        spins += 1;

        println!("Settled after {:.1}s", elapsed);
        controller.acknowledge();
    }

    println!("Thanks for playing! {} spin(s) this session.", spins);
    Ok(())
}
