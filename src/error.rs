// Crate error type
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl FleetError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        FleetError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = FleetError> = std::result::Result<T, E>;
