//! Error types for kernel configuration.

use thiserror::Error;

/// Errors raised while building or parsing a [`KernelConfig`](crate::KernelConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The cone sampler needs at least one sample.
    #[error("cone_samples must be at least 1")]
    NoSamples,

    /// Coverage threshold outside `[0, 1)`.
    #[error("coverage_threshold must be in [0, 1), got {0}")]
    InvalidThreshold(f32),

    /// Slab slack below 1 or not finite.
    #[error("slab_slack must be finite and at least 1, got {0}")]
    InvalidSlack(f32),

    /// Golden ratio not greater than 1.
    #[error("golden_ratio must be finite and greater than 1, got {0}")]
    InvalidGoldenRatio(f32),

    /// TOML document could not be parsed.
    #[error("failed to parse kernel config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be written as TOML.
    #[error("failed to serialize kernel config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
