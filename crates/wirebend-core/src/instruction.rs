//! Instruction model for parsed bend programs
//!
//! A parsed program is an ordered list of instructions, one per input
//! line, each carrying the 0-based source line it came from so later
//! stages can attribute errors to the original text.

use crate::units::WireUnit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single bend-program statement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", content = "arg", rename_all = "lowercase")]
pub enum Instruction {
    /// Select the unit system for subsequent feed lengths
    Unit(WireUnit),
    /// Open a repeat block executing its body the given number of times
    Repeat(u32),
    /// Advance the wire by a signed length in machine units
    Feed(f64),
    /// Rotate the bend axis to a signed angle in degrees; the sign
    /// selects the bend side
    Bend(f64),
    /// Close the nearest open repeat block
    End,
    /// Blank or comment line; carries no data
    Comment,
}

impl Instruction {
    /// True for the control-flow statements eliminated by expansion
    pub fn is_control_flow(&self) -> bool {
        matches!(self, Self::Repeat(_) | Self::End)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit(unit) => write!(f, "UNIT {}", unit),
            Self::Repeat(count) => write!(f, "REPEAT {}:", count),
            Self::Feed(length) => write!(f, "FEED {}", length),
            Self::Bend(angle) => write!(f, "BEND {}", angle),
            Self::End => write!(f, "END"),
            Self::Comment => write!(f, "(comment)"),
        }
    }
}

/// An instruction paired with the 0-based source line that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgramLine {
    /// The parsed statement
    pub instruction: Instruction,
    /// 0-based index of the source line
    pub line: usize,
}

impl ProgramLine {
    /// Pair an instruction with its source line
    pub fn new(instruction: Instruction, line: usize) -> Self {
        Self { instruction, line }
    }
}

/// A parsed or expanded bend program, in execution order
pub type Program = Vec<ProgramLine>;
