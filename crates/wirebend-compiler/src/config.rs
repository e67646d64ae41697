//! Compiler configuration
//!
//! Feedrates and clearance positions for the target bender. The
//! defaults match the shipped machine profile; each field can be
//! overridden independently, and overrides applied incrementally
//! accumulate on top of the current values.

use serde::{Deserialize, Serialize};

/// Machine tuning used during code generation
///
/// Immutable for the duration of a compile call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Feedrate for wire feed moves (units/min)
    pub feed_feedrate: f64,
    /// Feedrate for bend-axis moves (degrees/min)
    pub bend_feedrate: f64,
    /// Bend-axis clearance position used on the positive side
    pub positive_bend_clearance: f64,
    /// Bend-axis clearance position used on the negative side
    pub negative_bend_clearance: f64,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            feed_feedrate: 360.0,
            bend_feedrate: 6000.0,
            positive_bend_clearance: -82.0,
            negative_bend_clearance: -122.0,
        }
    }
}

impl CompilerConfig {
    /// Apply a partial override, leaving unset fields untouched
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(value) = overrides.feed_feedrate {
            self.feed_feedrate = value;
        }
        if let Some(value) = overrides.bend_feedrate {
            self.bend_feedrate = value;
        }
        if let Some(value) = overrides.positive_bend_clearance {
            self.positive_bend_clearance = value;
        }
        if let Some(value) = overrides.negative_bend_clearance {
            self.negative_bend_clearance = value;
        }
    }
}

/// Partial configuration record
///
/// Unset fields keep whatever value the configuration currently
/// holds, so successive applications reconfigure incrementally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    /// Override for [`CompilerConfig::feed_feedrate`]
    pub feed_feedrate: Option<f64>,
    /// Override for [`CompilerConfig::bend_feedrate`]
    pub bend_feedrate: Option<f64>,
    /// Override for [`CompilerConfig::positive_bend_clearance`]
    pub positive_bend_clearance: Option<f64>,
    /// Override for [`CompilerConfig::negative_bend_clearance`]
    pub negative_bend_clearance: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CompilerConfig::default();
        assert_eq!(config.feed_feedrate, 360.0);
        assert_eq!(config.bend_feedrate, 6000.0);
        assert_eq!(config.positive_bend_clearance, -82.0);
        assert_eq!(config.negative_bend_clearance, -122.0);
    }

    #[test]
    fn test_partial_override() {
        let mut config = CompilerConfig::default();
        config.apply(&ConfigOverrides {
            feed_feedrate: Some(400.0),
            ..Default::default()
        });

        assert_eq!(config.feed_feedrate, 400.0);
        assert_eq!(config.bend_feedrate, 6000.0);
        assert_eq!(config.negative_bend_clearance, -122.0);
    }

    #[test]
    fn test_incremental_overrides_accumulate() {
        let mut config = CompilerConfig::default();
        config.apply(&ConfigOverrides {
            bend_feedrate: Some(5000.0),
            ..Default::default()
        });
        config.apply(&ConfigOverrides {
            positive_bend_clearance: Some(-60.0),
            ..Default::default()
        });

        assert_eq!(config.bend_feedrate, 5000.0);
        assert_eq!(config.positive_bend_clearance, -60.0);
        assert_eq!(config.feed_feedrate, 360.0);
    }

    #[test]
    fn test_overrides_from_partial_json() {
        let overrides: ConfigOverrides =
            serde_json::from_str(r#"{"feed_feedrate": 300.0}"#).unwrap();
        assert_eq!(overrides.feed_feedrate, Some(300.0));
        assert_eq!(overrides.bend_feedrate, None);

        let mut config = CompilerConfig::default();
        config.apply(&overrides);
        assert_eq!(config.feed_feedrate, 300.0);
    }
}
