//! Fire-and-forget celebration bursts after a winner is announced.
//!
//! Bursts are scheduled as independent delayed callbacks on the tokio
//! runtime. Each callback only holds a weak reference to its target and is
//! skipped when the target has been dropped by the time the timer fires.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BurstColor {
    Red,
    Orange,
    Yellow,
    White,
    Green,
    Blue,
    Purple,
}

pub const BURST_COLORS: [BurstColor; 7] = [
    BurstColor::Red,
    BurstColor::Orange,
    BurstColor::Yellow,
    BurstColor::White,
    BurstColor::Green,
    BurstColor::Blue,
    BurstColor::Purple,
];

/// Largest burst delay, in tenths of a second (exclusive)
const MAX_DELAY_TENTHS: u64 = 20;

/// Area bursts may appear in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    /// Frame centred on the origin
    pub fn centered(width: f64, height: f64) -> Self {
        Self {
            min_x: -width / 2.0,
            min_y: -height / 2.0,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Burst {
    pub delay: Duration,
    pub x: f64,
    pub y: f64,
    pub color: BurstColor,
}

fn offset<R: Rng>(rng: &mut R, span: f64) -> f64 {
    if span > 0.0 {
        rng.gen_range(0.0..span)
    } else {
        0.0
    }
}

/// Random bursts inside `frame`, each delayed by 0.0 to 1.9 seconds.
pub fn plan_celebration<R: Rng>(count: usize, frame: Frame, rng: &mut R) -> Vec<Burst> {
    (0..count)
        .map(|_| Burst {
            delay: Duration::from_millis(rng.gen_range(0..MAX_DELAY_TENTHS) * 100),
            x: frame.min_x + offset(rng, frame.width),
            y: frame.min_y + offset(rng, frame.height),
            color: BURST_COLORS[rng.gen_range(0..BURST_COLORS.len())],
        })
        .collect()
}

/// Run `f` after `delay` if `target` is still alive then.
pub fn schedule_weak<T, F>(target: &Arc<T>, delay: Duration, f: F) -> JoinHandle<()>
where
    T: Send + Sync + 'static,
    F: FnOnce(Arc<T>) + Send + 'static,
{
    let weak = Arc::downgrade(target);
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        match weak.upgrade() {
            Some(target) => f(target),
            None => tracing::debug!("Skipping deferred callback, target was dropped"),
        }
    })
}

/// Schedule every burst in `plan` against `target`.
pub fn schedule_celebration<T, F>(
    target: &Arc<T>,
    plan: Vec<Burst>,
    on_burst: F,
) -> Vec<JoinHandle<()>>
where
    T: Send + Sync + 'static,
    F: Fn(&T, Burst) + Send + Sync + 'static,
{
    tracing::debug!("Scheduling {} celebration bursts", plan.len());

    let on_burst = Arc::new(on_burst);
    plan.into_iter()
        .map(|burst| {
            let on_burst = Arc::clone(&on_burst);
            schedule_weak(target, burst.delay, move |target| on_burst(&target, burst))
        })
        .collect()
}
