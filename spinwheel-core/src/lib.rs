//! spinwheel - prize wheel engine
//!
//! Splits a wheel among players in proportion to their tickets, watches a
//! spinning wheel until it comes to rest and picks the player whose segment
//! sits under the pointer. Physics integration and rendering stay outside
//! the engine; a damped reference wheel and a fixed-step driver are included
//! for simulations and tests.

pub mod celebration;
pub mod config;
pub mod controller;
pub mod error;
pub mod physics;
pub mod player;
pub mod segment;
pub mod simulation;

pub use config::{PhysicsConfig, ReentryPolicy, SpinDirection, WheelConfig};
pub use controller::{SpinController, SpinObserver, SpinPhase, SpinRequest, WheelState};
pub use error::{Result, WheelError};
pub use physics::{DampedWheel, WheelBody};
pub use player::{generate_roster, random_name, Player};
pub use segment::{build_segments, normalize_angle, resolve_player, Segment, SegmentTable};
pub use simulation::{spin_once, Simulation, SpinReport};
