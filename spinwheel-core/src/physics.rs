use crate::config::PhysicsConfig;

/// The physical wheel as seen by the spin controller.
///
/// The controller never integrates motion itself. It reads the current
/// rotation and angular velocity each tick and may ask the body to take an
/// impulse or to stop dead.
pub trait WheelBody {
    /// Accumulated rotation in radians, not wrapped
    fn rotation(&self) -> f64;

    fn angular_velocity(&self) -> f64;

    fn apply_angular_impulse(&mut self, impulse: f64);

    /// Zero angular velocity and any pending impulse, keeping the rotation
    fn halt(&mut self);
}

/// Pinned disc with linear angular damping
#[derive(Debug, Clone)]
pub struct DampedWheel {
    rotation: f64,
    angular_velocity: f64,
    moment_of_inertia: f64,
    angular_damping: f64,
}

impl DampedWheel {
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            rotation: 0.0,
            angular_velocity: 0.0,
            moment_of_inertia: config.moment_of_inertia,
            angular_damping: config.angular_damping,
        }
    }

    /// Start from an arbitrary resting angle
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Advance the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }

        self.rotation += self.angular_velocity * dt;
        let decay = (1.0 - self.angular_damping * dt).max(0.0);
        self.angular_velocity *= decay;
    }
}

impl WheelBody for DampedWheel {
    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    fn apply_angular_impulse(&mut self, impulse: f64) {
        self.angular_velocity += impulse / self.moment_of_inertia;
    }

    fn halt(&mut self) {
        self.angular_velocity = 0.0;
    }
}
