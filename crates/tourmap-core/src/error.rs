use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("coordinate out of range: latitude {latitude}, longitude {longitude}")]
    CoordinateOutOfRange { latitude: f64, longitude: f64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
