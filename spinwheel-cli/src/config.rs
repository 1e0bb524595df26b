use anyhow::Context;
use spinwheel_core::WheelConfig;
use std::path::PathBuf;

/// Where the wheel configuration comes from
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub config_path: Option<PathBuf>,
    /// Whether the path was given explicitly on the command line
    pub explicit: bool,
}

impl CliConfig {
    /// `--config` wins, then `<config dir>/spinwheel/config.json`.
    pub fn resolve(flag: Option<PathBuf>) -> Self {
        match flag {
            Some(path) => Self {
                config_path: Some(path),
                explicit: true,
            },
            None => Self {
                config_path: dirs::config_dir()
                    .map(|dir| dir.join("spinwheel").join("config.json")),
                explicit: false,
            },
        }
    }

    /// Load the wheel configuration, falling back to defaults when no file exists.
    pub fn wheel_config(&self) -> anyhow::Result<WheelConfig> {
        match &self.config_path {
            Some(path) if self.explicit || path.exists() => WheelConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display())),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(WheelConfig::default())
            }
        }
    }
}
