//! Unit handling for bend programs
//!
//! The DSL accepts several spellings for each unit system
//! (`inch`/`inches`/`in`, `millimeter`/`millimeters`/`mm`); they
//! normalize to the two G-code unit modes (G20/G21). The synonym
//! table is fixed at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit system selected by a `UNIT` statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireUnit {
    /// Imperial system (inches)
    In,
    /// Metric system (mm)
    Mm,
}

impl Default for WireUnit {
    fn default() -> Self {
        Self::Mm
    }
}

impl fmt::Display for WireUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::In => write!(f, "in"),
            Self::Mm => write!(f, "mm"),
        }
    }
}

impl FromStr for WireUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inch" | "inches" | "in" => Ok(Self::In),
            "millimeter" | "millimeters" | "mm" => Ok(Self::Mm),
            _ => Err(format!("Unknown unit: {}", s)),
        }
    }
}

impl WireUnit {
    /// G-code unit-selection command for this system
    pub fn gcode_mode(&self) -> &'static str {
        match self {
            Self::In => "G20",
            Self::Mm => "G21",
        }
    }

    /// Spelled-out name used in generated program comments
    pub fn description(&self) -> &'static str {
        match self {
            Self::In => "inches",
            Self::Mm => "millimeters",
        }
    }
}
