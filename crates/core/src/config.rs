//! Engine configuration
//!
//! Loaded by the binary from an optional JSON file; every key has a default.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{
    DEFAULT_DROP_INTERVAL_SECS, DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH, DEFAULT_FRAME_RATE,
    SOFT_DROP_INTERVAL_SECS,
};

/// Tunable engine parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Field width in cells
    pub field_width: usize,
    /// Field height in cells
    pub field_height: usize,
    /// Seconds between gravity steps
    pub drop_interval_secs: f32,
    /// Seconds between gravity steps while soft dropping
    pub soft_drop_interval_secs: f32,
    /// RNG seed; `None` lets the caller pick one
    pub seed: Option<u32>,
    /// Update/render cadence of the adapter, in frames per second
    pub frame_rate: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_WIDTH,
            field_height: DEFAULT_FIELD_HEIGHT,
            drop_interval_secs: DEFAULT_DROP_INTERVAL_SECS,
            soft_drop_interval_secs: SOFT_DROP_INTERVAL_SECS,
            seed: None,
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

impl EngineConfig {
    /// Check every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.field_height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        // Spawn columns are width/2 and width/2 + 1.
        if self.field_width / 2 + 1 >= self.field_width {
            return Err(ConfigError::FieldTooNarrow {
                width: self.field_width,
            });
        }
        if !(self.drop_interval_secs.is_finite() && self.drop_interval_secs > 0.0) {
            return Err(ConfigError::InvalidInterval {
                name: "drop_interval_secs",
                value: self.drop_interval_secs,
            });
        }
        if !(self.soft_drop_interval_secs.is_finite() && self.soft_drop_interval_secs > 0.0) {
            return Err(ConfigError::InvalidInterval {
                name: "soft_drop_interval_secs",
                value: self.soft_drop_interval_secs,
            });
        }
        if self.soft_drop_interval_secs >= self.drop_interval_secs {
            return Err(ConfigError::SoftDropNotFaster {
                drop: self.drop_interval_secs,
                soft_drop: self.soft_drop_interval_secs,
            });
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        Ok(())
    }
}

/// Why a configuration was rejected
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    ZeroWidth,
    ZeroHeight,
    FieldTooNarrow { width: usize },
    InvalidInterval { name: &'static str, value: f32 },
    SoftDropNotFaster { drop: f32, soft_drop: f32 },
    ZeroFrameRate,
}

impl ConfigError {
    pub fn code(self) -> &'static str {
        match self {
            ConfigError::ZeroWidth | ConfigError::ZeroHeight | ConfigError::FieldTooNarrow { .. } => {
                "invalid_field"
            }
            ConfigError::InvalidInterval { .. } | ConfigError::SoftDropNotFaster { .. } => {
                "invalid_timing"
            }
            ConfigError::ZeroFrameRate => "invalid_frame_rate",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroWidth => write!(f, "field width must be positive"),
            ConfigError::ZeroHeight => write!(f, "field height must be positive"),
            ConfigError::FieldTooNarrow { width } => {
                write!(f, "field width {width} is too narrow to spawn a piece")
            }
            ConfigError::InvalidInterval { name, value } => {
                write!(f, "{name} must be a positive number of seconds, got {value}")
            }
            ConfigError::SoftDropNotFaster { drop, soft_drop } => write!(
                f,
                "soft drop interval {soft_drop}s must be shorter than drop interval {drop}s"
            ),
            ConfigError::ZeroFrameRate => write!(f, "frame rate must be positive"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.field_width, 10);
        assert_eq!(config.field_height, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let config = EngineConfig {
            field_width: 0,
            ..EngineConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWidth));

        let config = EngineConfig {
            field_height: 0,
            ..EngineConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroHeight));
    }

    #[test]
    fn test_rejects_narrow_field() {
        let config = EngineConfig {
            field_width: 1,
            ..EngineConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.code(), "invalid_field");
        assert!(err.to_string().contains("too narrow"));

        let config = EngineConfig {
            field_width: 2,
            ..EngineConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::FieldTooNarrow { width: 2 })
        );

        let config = EngineConfig {
            field_width: 3,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_intervals() {
        let config = EngineConfig {
            drop_interval_secs: f32::NAN,
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidInterval { name: "drop_interval_secs", .. })
        ));

        let config = EngineConfig {
            soft_drop_interval_secs: 0.5,
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SoftDropNotFaster { .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"field_width": 12, "seed": 99}"#).unwrap();
        assert_eq!(config.field_width, 12);
        assert_eq!(config.field_height, 20);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.drop_interval_secs, 0.3);
        assert!(config.validate().is_ok());
    }
}
