use super::print_segments;
use spinwheel_core::{Player, SegmentTable};

pub fn show_segments(tickets: &[u32]) -> anyhow::Result<()> {
    let roster: Vec<Player> = tickets
        .iter()
        .enumerate()
        .map(|(i, &count)| Player::new(format!("Player {}", i + 1), count))
        .collect();

    let table = SegmentTable::new(roster);
    if tickets.iter().all(|&count| count == 0) {
        println!("No tickets held, splitting the wheel evenly");
    }
    print_segments(&table);

    Ok(())
}
