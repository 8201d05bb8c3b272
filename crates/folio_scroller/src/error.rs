//! Scroller error types

use thiserror::Error;

/// Configuration errors
///
/// Navigation itself never fails; only turning text into a
/// [`ScrollerConfig`](crate::ScrollerConfig) can.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration text is not valid TOML or has a bad value
    #[error("Invalid scroller configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
