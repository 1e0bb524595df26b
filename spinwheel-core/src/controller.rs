//! Settle detection and winner resolution for a spinning wheel.
//!
//! `SpinController` is driven by whatever loop integrates the wheel's
//! physics. Each tick it reads the body's rotation and angular velocity,
//! and once the wheel has stayed under the rest threshold for the dwell
//! duration it stops the body, resolves the pointer angle against the
//! segment table and reports the winner to its observer.

use crate::config::{ReentryPolicy, WheelConfig};
use crate::error::Result;
use crate::physics::WheelBody;
use crate::player::Player;
use crate::segment::SegmentTable;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Receives the start and end of every spin cycle, once each and in order.
pub trait SpinObserver {
    fn on_spin_began(&mut self);

    /// `winner` is `None` when no segment could be resolved (empty roster).
    fn on_spin_ended(&mut self, winner: Option<&Player>);
}

impl<T: SpinObserver + ?Sized> SpinObserver for &mut T {
    fn on_spin_began(&mut self) {
        (**self).on_spin_began();
    }

    fn on_spin_ended(&mut self, winner: Option<&Player>) {
        (**self).on_spin_ended(winner);
    }
}

impl<T: SpinObserver + ?Sized> SpinObserver for Box<T> {
    fn on_spin_began(&mut self) {
        (**self).on_spin_began();
    }

    fn on_spin_ended(&mut self, winner: Option<&Player>) {
        (**self).on_spin_ended(winner);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinPhase {
    Idle,
    Spinning,
    /// Under the rest threshold, dwell timer running
    Settling,
    Resolved,
}

/// Last observed state of the wheel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WheelState {
    pub rotation: f64,
    pub angular_velocity: f64,
    pub is_spinning: bool,
    /// Simulation time at which the wheel first dropped under the rest threshold
    pub dwell_start: Option<f64>,
}

/// Outcome of a `spin()` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinRequest {
    Started { impulse: f64 },
    Restarted { impulse: f64 },
    Ignored,
}

pub struct SpinController<O, R> {
    config: WheelConfig,
    table: SegmentTable,
    observer: O,
    rng: R,
    state: WheelState,
    phase: SpinPhase,
    winner: Option<usize>,
}

impl<O: SpinObserver, R: Rng> SpinController<O, R> {
    pub fn new(config: WheelConfig, table: SegmentTable, observer: O, rng: R) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            table,
            observer,
            rng,
            state: WheelState::default(),
            phase: SpinPhase::Idle,
            winner: None,
        })
    }

    pub fn table(&self) -> &SegmentTable {
        &self.table
    }

    pub fn state(&self) -> &WheelState {
        &self.state
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning | SpinPhase::Settling)
    }

    /// Winner of the last resolved spin, until it is acknowledged
    pub fn winner(&self) -> Option<&Player> {
        if self.phase != SpinPhase::Resolved {
            return None;
        }
        self.winner.and_then(|index| self.table.roster().get(index))
    }

    /// Kick the wheel with a random impulse.
    ///
    /// While a spin is already in progress the configured [`ReentryPolicy`]
    /// decides between dropping the request and restarting the spin within
    /// the current cycle. Restarting does not notify the observer again.
    pub fn spin<B: WheelBody + ?Sized>(&mut self, body: &mut B) -> SpinRequest {
        match self.phase {
            SpinPhase::Spinning | SpinPhase::Settling => {
                return match self.config.reentry {
                    ReentryPolicy::Ignore => {
                        tracing::debug!("Ignoring spin request, wheel already in motion");
                        SpinRequest::Ignored
                    }
                    ReentryPolicy::Restart => {
                        body.halt();
                        let impulse = self.draw_impulse();
                        body.apply_angular_impulse(impulse);
                        self.state.dwell_start = None;
                        self.phase = SpinPhase::Spinning;

                        tracing::info!("Restarted spin with impulse {:.0}", impulse);
                        SpinRequest::Restarted { impulse }
                    }
                };
            }
            SpinPhase::Resolved => self.acknowledge(),
            SpinPhase::Idle => {}
        }

        let impulse = self.draw_impulse();
        body.apply_angular_impulse(impulse);

        self.state.is_spinning = true;
        self.state.dwell_start = None;
        self.winner = None;
        self.phase = SpinPhase::Spinning;

        tracing::info!("Spinning wheel with impulse {:.0}", impulse);
        self.observer.on_spin_began();

        SpinRequest::Started { impulse }
    }

    /// Feed one simulation tick at time `now` (seconds).
    pub fn update<B: WheelBody + ?Sized>(&mut self, now: f64, body: &mut B) -> SpinPhase {
        self.state.rotation = body.rotation();
        self.state.angular_velocity = body.angular_velocity();

        if !self.is_spinning() {
            return self.phase;
        }

        if self.state.angular_velocity.abs() < self.config.rest_threshold {
            let since = match self.state.dwell_start {
                Some(since) => since,
                None => {
                    tracing::debug!("Wheel nearly at rest at t={:.3}", now);
                    self.state.dwell_start = Some(now);
                    self.phase = SpinPhase::Settling;
                    now
                }
            };

            if now - since >= self.config.dwell.as_secs_f64() {
                self.settle(body);
            }
        } else if self.state.dwell_start.take().is_some() {
            tracing::debug!("Wheel sped up again at t={:.3}, dwell reset", now);
            self.phase = SpinPhase::Spinning;
        }

        self.phase
    }

    /// Return to `Idle` after a resolved spin.
    pub fn acknowledge(&mut self) {
        if self.phase == SpinPhase::Resolved {
            self.phase = SpinPhase::Idle;
            self.winner = None;
        }
    }

    fn draw_impulse(&mut self) -> f64 {
        let magnitude = self
            .rng
            .gen_range(self.config.impulse_min..self.config.impulse_max);
        magnitude * self.config.direction.sign()
    }

    fn settle<B: WheelBody + ?Sized>(&mut self, body: &mut B) {
        body.halt();

        self.state.rotation = body.rotation();
        self.state.angular_velocity = 0.0;
        self.state.is_spinning = false;
        self.state.dwell_start = None;

        self.winner = self.table.resolve_index(self.state.rotation);
        self.phase = SpinPhase::Resolved;

        let winner = self.winner.and_then(|index| self.table.roster().get(index));
        match winner {
            Some(player) => tracing::info!(
                "Wheel settled at {:.3} rad, winner: {}",
                self.state.rotation,
                player.name()
            ),
            None => tracing::warn!(
                "Wheel settled at {:.3} rad but no winner could be determined",
                self.state.rotation
            ),
        }

        self.observer.on_spin_ended(winner);
    }
}

impl<O, R> std::fmt::Debug for SpinController<O, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpinController")
            .field("phase", &self.phase)
            .field("state", &self.state)
            .field("segments", &self.table.len())
            .field("winner", &self.winner)
            .finish()
    }
}
