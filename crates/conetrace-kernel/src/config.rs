//! Tunable kernel parameters.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::intersect::DEFAULT_SLAB_SLACK;

/// Default number of cone sample rays.
pub const DEFAULT_CONE_SAMPLES: usize = 64;

/// Default fraction of sample hits a cone query must exceed.
pub const DEFAULT_COVERAGE_THRESHOLD: f32 = 0.3;

/// Golden ratio `(1 + sqrt(5)) / 2` driving the sample spiral.
pub const DEFAULT_GOLDEN_RATIO: f32 = 1.618_034;

/// Kernel parameters.
///
/// Missing fields take their defaults when deserialized, so a partial TOML
/// document such as `cone_samples = 128` is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Number of rays cast per cone query.
    pub cone_samples: usize,
    /// Fraction of hits a cone query must exceed to report a hit.
    pub coverage_threshold: f32,
    /// Widening factor for the slab test exit parameter.
    pub slab_slack: f32,
    /// Ratio whose square sets the angular step of the sample spiral.
    pub golden_ratio: f32,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            cone_samples: DEFAULT_CONE_SAMPLES,
            coverage_threshold: DEFAULT_COVERAGE_THRESHOLD,
            slab_slack: DEFAULT_SLAB_SLACK,
            golden_ratio: DEFAULT_GOLDEN_RATIO,
        }
    }
}

impl KernelConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Validate parameters.
    pub fn validate(&self) -> Result<()> {
        if self.cone_samples == 0 {
            return Err(ConfigError::NoSamples);
        }
        if !(0.0..1.0).contains(&self.coverage_threshold) {
            return Err(ConfigError::InvalidThreshold(self.coverage_threshold));
        }
        if !self.slab_slack.is_finite() || self.slab_slack < 1.0 {
            return Err(ConfigError::InvalidSlack(self.slab_slack));
        }
        if !self.golden_ratio.is_finite() || self.golden_ratio <= 1.0 {
            return Err(ConfigError::InvalidGoldenRatio(self.golden_ratio));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = KernelConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cone_samples, 64);
        assert_eq!(config.slab_slack, 1.000_000_24);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = KernelConfig::from_toml_str("cone_samples = 128\n").unwrap();
        assert_eq!(config.cone_samples, 128);
        assert_eq!(config.coverage_threshold, DEFAULT_COVERAGE_THRESHOLD);
        assert_eq!(config.golden_ratio, DEFAULT_GOLDEN_RATIO);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = KernelConfig::from_toml_str("").unwrap();
        assert_eq!(config, KernelConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = KernelConfig {
            cone_samples: 16,
            coverage_threshold: 0.5,
            ..Default::default()
        };
        let parsed = KernelConfig::from_toml_str(&config.to_toml_string().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let cases = [
            "cone_samples = 0",
            "coverage_threshold = 1.0",
            "coverage_threshold = -0.1",
            "slab_slack = 0.5",
            "golden_ratio = 1.0",
        ];
        for source in cases {
            assert!(KernelConfig::from_toml_str(source).is_err(), "{source}");
        }
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = KernelConfig::from_toml_str("cone_samples = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse kernel config"));
    }

    #[test]
    fn test_error_messages() {
        let err = KernelConfig {
            coverage_threshold: 2.0,
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "coverage_threshold must be in [0, 1), got 2");
    }
}
