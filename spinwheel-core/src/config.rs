use crate::error::{Result, WheelError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Angular speed below which the wheel counts as nearly stopped
    pub rest_threshold: f64,
    /// How long the wheel must stay under `rest_threshold` before it settles
    pub dwell: Duration,
    pub impulse_min: f64,
    pub impulse_max: f64,
    pub direction: SpinDirection,
    pub reentry: ReentryPolicy,
    pub physics: PhysicsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub moment_of_inertia: f64,
    pub angular_damping: f64,
    pub timestep: Duration,
    pub max_sim_time: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinDirection {
    Clockwise,
    CounterClockwise,
}

impl SpinDirection {
    /// Sign applied to the impulse magnitude.
    pub fn sign(self) -> f64 {
        match self {
            SpinDirection::Clockwise => -1.0,
            SpinDirection::CounterClockwise => 1.0,
        }
    }
}

/// What `spin()` does while a spin cycle is already running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReentryPolicy {
    /// Drop the request
    Ignore,
    /// Halt the wheel and kick it again within the same cycle
    Restart,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            rest_threshold: 0.2,
            dwell: Duration::from_secs(2),
            impulse_min: 4000.0,
            impulse_max: 7000.0,
            direction: SpinDirection::Clockwise,
            reentry: ReentryPolicy::Ignore,
            physics: PhysicsConfig::default(),
        }
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            moment_of_inertia: 500.0,
            angular_damping: 0.9,
            timestep: Duration::from_micros(16_667), // ~60 Hz
            max_sim_time: Duration::from_secs(120),
        }
    }
}

impl WheelConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;

        tracing::debug!("Loaded wheel config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.rest_threshold.is_finite() || self.rest_threshold <= 0.0 {
            return Err(WheelError::config("Rest threshold must be a positive number"));
        }

        if self.dwell.is_zero() {
            return Err(WheelError::config("Dwell duration must be greater than 0"));
        }

        if !self.impulse_min.is_finite() || !self.impulse_max.is_finite() {
            return Err(WheelError::config("Impulse range must be finite"));
        }

        if self.impulse_min <= 0.0 || self.impulse_min >= self.impulse_max {
            return Err(WheelError::config(format!(
                "Impulse range [{}, {}) is empty or not positive",
                self.impulse_min, self.impulse_max
            )));
        }

        self.physics.validate(self.dwell)
    }
}

impl PhysicsConfig {
    fn validate(&self, dwell: Duration) -> Result<()> {
        if !self.moment_of_inertia.is_finite() || self.moment_of_inertia <= 0.0 {
            return Err(WheelError::config(
                "Moment of inertia must be a positive number",
            ));
        }

        if !self.angular_damping.is_finite() || self.angular_damping < 0.0 {
            return Err(WheelError::config("Angular damping cannot be negative"));
        }

        if self.timestep.is_zero() {
            return Err(WheelError::config("Timestep must be greater than 0"));
        }

        if self.max_sim_time <= dwell {
            return Err(WheelError::config(
                "Max simulation time must exceed the dwell duration",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = WheelConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rest_threshold, 0.2);
        assert_eq!(config.dwell, Duration::from_secs(2));
        assert_eq!(config.direction.sign(), -1.0);
    }

    #[test]
    fn test_rejects_empty_impulse_range() {
        let config = WheelConfig {
            impulse_min: 7000.0,
            impulse_max: 7000.0,
            ..WheelConfig::default()
        };
        assert!(matches!(config.validate(), Err(WheelError::Config(_))));
    }

    #[test]
    fn test_rejects_bad_physics() {
        let mut config = WheelConfig::default();
        config.physics.moment_of_inertia = 0.0;
        assert!(config.validate().is_err());

        let mut config = WheelConfig::default();
        config.physics.max_sim_time = Duration::from_secs(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "rest_threshold": 0.5, "reentry": "Restart" }}"#).unwrap();

        let config = WheelConfig::load(file.path()).unwrap();
        assert_eq!(config.rest_threshold, 0.5);
        assert_eq!(config.reentry, ReentryPolicy::Restart);
        assert_eq!(config.impulse_max, 7000.0);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "rest_threshold": -1.0 }}"#).unwrap();
        assert!(matches!(
            WheelConfig::load(file.path()),
            Err(WheelError::Config(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            WheelConfig::load(file.path()),
            Err(WheelError::Serialization(_))
        ));
    }
}
