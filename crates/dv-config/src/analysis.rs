//! Mock analysis configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_text_delay_ms() -> u64 {
    2000
}

const fn default_image_delay_ms() -> u64 {
    2500
}

/// 5 MiB.
const fn default_max_image_bytes() -> u64 {
    5 * 1024 * 1024
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Simulated processing latency for text analysis.
    #[serde(default = "default_text_delay_ms")]
    pub text_delay_ms: u64,

    /// Simulated processing latency for image analysis.
    #[serde(default = "default_image_delay_ms")]
    pub image_delay_ms: u64,

    /// Largest accepted image payload, in bytes.
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: u64,

    /// Fixed RNG seed for reproducible verdicts. OS entropy when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            text_delay_ms: default_text_delay_ms(),
            image_delay_ms: default_image_delay_ms(),
            max_image_bytes: default_max_image_bytes(),
            seed: None,
        }
    }
}

impl AnalysisConfig {
    #[must_use]
    pub const fn text_delay(&self) -> Duration {
        Duration::from_millis(self.text_delay_ms)
    }

    #[must_use]
    pub const fn image_delay(&self) -> Duration {
        Duration::from_millis(self.image_delay_ms)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.max_image_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "analysis.max_image_bytes".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = AnalysisConfig::default();
        assert_eq!(config.text_delay(), Duration::from_millis(2000));
        assert_eq!(config.image_delay(), Duration::from_millis(2500));
        assert_eq!(config.max_image_bytes, 5_242_880);
        assert!(config.seed.is_none());
    }

    #[test]
    fn zero_image_limit_is_rejected() {
        let config = AnalysisConfig {
            max_image_bytes: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("analysis.max_image_bytes"));
    }
}
