use crate::config::{PhysicsConfig, WheelConfig};
use crate::controller::{SpinController, SpinObserver, SpinPhase, SpinRequest};
use crate::error::{Result, WheelError};
use crate::physics::{DampedWheel, WheelBody};
use crate::player::Player;
use crate::segment::{normalize_angle, SegmentTable};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Summary of one simulated spin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinReport {
    pub winner: Option<Player>,
    pub impulse: f64,
    pub final_rotation: f64,
    /// `final_rotation` wrapped into `[0, 2π)`
    pub pointer_angle: f64,
    /// Simulated seconds from the impulse to the settle
    pub elapsed: f64,
    pub ticks: u64,
}

/// Fixed-timestep loop that steps a [`DampedWheel`] and feeds the controller.
#[derive(Debug, Clone)]
pub struct Simulation {
    timestep: f64,
    max_time: f64,
}

impl Simulation {
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            timestep: config.timestep.as_secs_f64(),
            max_time: config.max_sim_time.as_secs_f64(),
        }
    }

    /// Step until the controller resolves the current spin.
    pub fn run<O: SpinObserver, R: Rng>(
        &self,
        controller: &mut SpinController<O, R>,
        body: &mut DampedWheel,
    ) -> Result<(f64, u64)> {
        if !controller.is_spinning() {
            return Err(WheelError::invalid_state(
                "Wheel must be spinning before the simulation runs",
            ));
        }

        let mut ticks = 0u64;
        loop {
            body.step(self.timestep);
            ticks += 1;
            // now == ticks * timestep, never accumulated
            let now = ticks as f64 * self.timestep;

            if controller.update(now, body) == SpinPhase::Resolved {
                tracing::debug!("Simulation settled after {} ticks ({:.2}s)", ticks, now);
                return Ok((now, ticks));
            }

            if now > self.max_time {
                return Err(WheelError::Timeout {
                    seconds: self.max_time,
                });
            }
        }
    }
}

/// Spin a fresh wheel for `roster` once and report the outcome.
pub fn spin_once<O: SpinObserver, R: Rng>(
    config: &WheelConfig,
    roster: Vec<Player>,
    observer: O,
    rng: R,
) -> Result<SpinReport> {
    let table = SegmentTable::new(roster);
    let mut body = DampedWheel::new(&config.physics);
    let mut controller = SpinController::new(config.clone(), table, observer, rng)?;

    let impulse = match controller.spin(&mut body) {
        SpinRequest::Started { impulse } | SpinRequest::Restarted { impulse } => impulse,
        SpinRequest::Ignored => {
            return Err(WheelError::invalid_state("Fresh wheel refused to spin"));
        }
    };

    let simulation = Simulation::new(&config.physics);
    let (elapsed, ticks) = simulation.run(&mut controller, &mut body)?;

    let final_rotation = body.rotation();
    Ok(SpinReport {
        winner: controller.winner().cloned(),
        impulse,
        final_rotation,
        pointer_angle: normalize_angle(final_rotation),
        elapsed,
        ticks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::generate_roster;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    struct Silent;

    impl SpinObserver for Silent {
        fn on_spin_began(&mut self) {}
        fn on_spin_ended(&mut self, _winner: Option<&Player>) {}
    }

    fn players(tickets: &[u32]) -> Vec<Player> {
        tickets
            .iter()
            .enumerate()
            .map(|(i, &t)| Player::new(format!("Player {}", i + 1), t))
            .collect()
    }

    #[test]
    fn test_spin_once_settles_with_winner() {
        let config = WheelConfig::default();
        let roster = players(&[30, 10, 5]);
        let table = SegmentTable::new(roster.clone());

        let report = spin_once(&config, roster, Silent, StdRng::seed_from_u64(11)).unwrap();

        let winner = report.winner.as_ref().unwrap();
        assert_eq!(table.resolve(report.final_rotation).map(Player::name), Some(winner.name()));
        assert!(report.elapsed > config.dwell.as_secs_f64());
        assert!(report.elapsed < config.physics.max_sim_time.as_secs_f64());
        assert!(report.final_rotation < 0.0);
        assert!((0.0..std::f64::consts::TAU).contains(&report.pointer_angle));
    }

    #[test]
    fn test_seeded_spins_are_reproducible() {
        let config = WheelConfig::default();
        let roster = generate_roster(6, true, &mut StdRng::seed_from_u64(5));

        let a = spin_once(&config, roster.clone(), Silent, StdRng::seed_from_u64(77)).unwrap();
        let b = spin_once(&config, roster, Silent, StdRng::seed_from_u64(77)).unwrap();

        assert_eq!(a.impulse, b.impulse);
        assert_eq!(a.final_rotation, b.final_rotation);
        assert_eq!(a.ticks, b.ticks);
        assert_eq!(a.winner.map(|p| p.id()), b.winner.map(|p| p.id()));
    }

    #[test]
    fn test_heavier_player_wins_more_often() {
        let config = WheelConfig::default();
        let roster = players(&[30, 10]);
        let favourite = roster[0].id();

        let runs = 400;
        let wins = (0..runs)
            .filter(|&seed| {
                let report =
                    spin_once(&config, roster.clone(), Silent, StdRng::seed_from_u64(seed))
                        .unwrap();
                report.winner.map(|p| p.id()) == Some(favourite)
            })
            .count();

        let share = wins as f64 / runs as f64;
        assert!(share > 0.6 && share < 0.9, "share was {}", share);
    }

    #[test]
    fn test_empty_roster_settles_without_winner() {
        let report =
            spin_once(&WheelConfig::default(), Vec::new(), Silent, StdRng::seed_from_u64(2))
                .unwrap();
        assert!(report.winner.is_none());
    }

    #[test]
    fn test_undamped_wheel_times_out() {
        let mut config = WheelConfig::default();
        config.physics.angular_damping = 0.0;
        config.physics.max_sim_time = Duration::from_secs(5);

        let result = spin_once(&config, players(&[1, 1]), Silent, StdRng::seed_from_u64(4));
        assert!(matches!(result, Err(WheelError::Timeout { .. })));
    }

    #[test]
    fn test_run_requires_spinning_wheel() {
        let config = WheelConfig::default();
        let mut controller = SpinController::new(
            config.clone(),
            SegmentTable::new(players(&[1])),
            Silent,
            StdRng::seed_from_u64(0),
        )
        .unwrap();
        let mut body = DampedWheel::new(&config.physics);

        let result = Simulation::new(&config.physics).run(&mut controller, &mut body);
        assert!(matches!(result, Err(WheelError::InvalidState(_))));
    }
}
