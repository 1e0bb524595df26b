//! Weighted partition of the wheel into per-player angular segments.
//!
//! Every player gets a slice proportional to `max(tickets, 1)`, so a roster
//! of all-zero tickets splits the wheel evenly and a single zero-ticket
//! player still receives a sliver. Segments are half-open `[start, end)`
//! ranges in radians, laid out contiguously from `0` in roster order, with
//! the last one ending at exactly `2π`.

use crate::player::Player;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::sync::Arc;

/// Angular range of the wheel owned by one roster entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    owner: usize,
    start_angle: f64,
    end_angle: f64,
}

impl Segment {
    /// Roster index of the owning player
    pub fn owner(&self) -> usize {
        self.owner
    }

    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    pub fn width(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// `angle` must already be normalized.
    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.start_angle && angle < self.end_angle
    }
}

/// Effective weight used when sizing a player's segment
fn effective_weight(player: &Player) -> u64 {
    u64::from(player.tickets().max(1))
}

/// Partition `[0, 2π)` among `players` in roster order.
pub fn build_segments(players: &[Player]) -> Vec<Segment> {
    let total: u64 = players.iter().map(effective_weight).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut segments = Vec::with_capacity(players.len());
    let mut cumulative = 0u64;
    let mut start_angle = 0.0;

    for (owner, player) in players.iter().enumerate() {
        cumulative += effective_weight(player);
        // Edges come from the integer running total; the last one is exactly 2π.
        let end_angle = TAU * (cumulative as f64 / total as f64);

        segments.push(Segment {
            owner,
            start_angle,
            end_angle,
        });
        start_angle = end_angle;
    }

    segments
}

/// Wrap an unbounded rotation into `[0, 2π)`. Non-finite input stays non-finite.
pub fn normalize_angle(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(TAU);
    // Tiny negative inputs round up to TAU.
    if normalized >= TAU {
        0.0
    } else {
        normalized
    }
}

/// Segment layout together with the roster it was built from.
#[derive(Debug, Clone)]
pub struct SegmentTable {
    roster: Arc<[Player]>,
    segments: Vec<Segment>,
}

impl SegmentTable {
    pub fn new(roster: impl Into<Arc<[Player]>>) -> Self {
        let roster = roster.into();
        let segments = build_segments(&roster);

        tracing::debug!("Built {} wheel segments", segments.len());
        Self { roster, segments }
    }

    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments paired with their owners, in roster order
    pub fn iter(&self) -> impl Iterator<Item = (&Segment, &Player)> {
        self.segments
            .iter()
            .filter_map(move |segment| Some((segment, self.roster.get(segment.owner)?)))
    }

    /// Roster index of the segment under the pointer at `angle`.
    ///
    /// An angle sitting exactly on an edge belongs to the segment that starts
    /// there, so `0` maps to the first player.
    pub fn resolve_index(&self, angle: f64) -> Option<usize> {
        if !angle.is_finite() {
            return None;
        }

        let angle = normalize_angle(angle);
        let position = self
            .segments
            .partition_point(|segment| segment.end_angle <= angle);

        self.segments
            .get(position)
            .filter(|segment| segment.contains(angle))
            .map(Segment::owner)
    }

    pub fn resolve(&self, angle: f64) -> Option<&Player> {
        self.resolve_index(angle).and_then(|index| self.roster.get(index))
    }
}

/// Player whose segment contains `angle`, or `None` for an empty table.
pub fn resolve_player(angle: f64, table: &SegmentTable) -> Option<&Player> {
    table.resolve(angle)
}
