use thiserror::Error;

pub type Result<T> = std::result::Result<T, WheelError>;

#[derive(Error, Debug)]
pub enum WheelError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid spin state: {0}")]
    InvalidState(String),

    #[error("Wheel did not settle within {seconds:.1}s of simulated time")]
    Timeout { seconds: f64 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WheelError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }
}
