//! G-code emission for expanded bend programs
//!
//! Models the physical constraints of the bender: the bend pin must
//! sit at the side-appropriate clearance position before the wire
//! advances, and the duck pin must be raised before the bend axis
//! crosses from one side to the other, then lowered again to bend.
//!
//! Axis mapping: X is the bend axis (degrees), Y is the wire feed
//! axis, Z drives the duck pin.

use tracing::debug;
use wirebend_core::{CompileError, Instruction, Program, WireUnit};

use crate::config::CompilerConfig;

/// Mutable machine model threaded through one generation pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachineState {
    /// Bend-axis angle after the last bend. `<= 0` is the negative
    /// side; the initial 0 counts as negative.
    pub current_angle: f64,
    /// Whether the duck pin is currently raised
    pub ducked: bool,
}

impl Default for MachineState {
    fn default() -> Self {
        Self {
            current_angle: 0.0,
            ducked: false,
        }
    }
}

impl MachineState {
    /// True while the bend axis sits on the non-positive side
    pub fn on_negative_side(&self) -> bool {
        self.current_angle <= 0.0
    }
}

/// G-code generator for a single expanded program
///
/// Each generator owns a fresh [`MachineState`] and is consumed by
/// [`generate`](Self::generate), so state cannot leak between
/// successive programs.
pub struct CodeGenerator<'a> {
    config: &'a CompilerConfig,
    state: MachineState,
}

impl<'a> CodeGenerator<'a> {
    /// Create a generator for one pass over an expanded program
    pub fn new(config: &'a CompilerConfig) -> Self {
        Self {
            config,
            state: MachineState::default(),
        }
    }

    /// Generate the command lines for an expanded program
    ///
    /// Emits one block of commands per instruction, each followed by
    /// a blank separator line. Comments contribute no output at all.
    /// Control-flow instructions cannot occur in an expanded program;
    /// one reaching this stage is an internal error, not a panic.
    pub fn generate(mut self, program: &Program) -> Result<Vec<String>, CompileError> {
        let mut lines = self.preamble();
        for entry in program {
            let block = match entry.instruction {
                Instruction::Feed(length) => self.feed(length),
                Instruction::Bend(angle) => self.bend(angle),
                Instruction::Unit(unit) => self.unit(unit),
                Instruction::Comment => continue,
                Instruction::Repeat(_) | Instruction::End => {
                    return Err(CompileError::Internal(format!(
                        "control-flow instruction reached code generation: {}",
                        entry.instruction
                    )));
                }
            };
            lines.extend(block);
            lines.push(String::new());
        }
        lines.extend(self.epilogue());
        debug!("Emitted {} command lines", lines.len());
        Ok(lines)
    }

    /// Program header and absolute-mode framing
    fn preamble(&self) -> Vec<String> {
        vec![
            "(Bend Program)".to_string(),
            "(Generated by the WireBend compiler)".to_string(),
            String::new(),
            "(Absolute Mode)".to_string(),
            "G90".to_string(),
            String::new(),
        ]
    }

    /// Closing sequence, currently empty
    fn epilogue(&self) -> Vec<String> {
        Vec::new()
    }

    /// Raise the duck pin; emits nothing if it is already up unless
    /// forced
    fn duck(&mut self, force: bool) -> Vec<String> {
        if self.state.ducked && !force {
            return Vec::new();
        }
        self.state.ducked = true;
        vec!["(Duck)".to_string(), "G0Z180".to_string()]
    }

    /// Lower the duck pin; emits nothing if it is already down unless
    /// forced
    fn unduck(&mut self, force: bool) -> Vec<String> {
        if !self.state.ducked && !force {
            return Vec::new();
        }
        self.state.ducked = false;
        vec!["(Unduck)".to_string(), "G0Z0".to_string()]
    }

    /// Feed the wire, clearing the bend pin out of its path first
    ///
    /// The clearance position follows the side the bend axis is
    /// currently on, regardless of the feed length's sign. The feed
    /// itself runs in relative mode, bracketed by G91/G90.
    fn feed(&mut self, length: f64) -> Vec<String> {
        let clearance = if self.state.on_negative_side() {
            self.config.negative_bend_clearance
        } else {
            self.config.positive_bend_clearance
        };
        vec![
            format!("(Feed {:.3})", length),
            format!("G0X{:.5}", clearance),
            "G91".to_string(),
            format!("G1Y{:.5}F{:.3}", length, self.config.feed_feedrate),
            "G90".to_string(),
        ]
    }

    /// Bend the wire, ducking under it when the bend changes side
    fn bend(&mut self, angle: f64) -> Vec<String> {
        let crossing = if self.state.on_negative_side() {
            angle > 0.0
        } else {
            angle <= 0.0
        };
        let block = if crossing {
            let (clearance, side) = if angle > 0.0 {
                (self.config.positive_bend_clearance, "positive")
            } else {
                (self.config.negative_bend_clearance, "negative")
            };
            let mut block = self.duck(false);
            block.push(format!("(Clear wire on {} side)", side));
            block.push(format!("G0X{:.5}", clearance));
            block.extend(self.unduck(false));
            block.push(format!("G1X{:.5}F{:.3}", angle, self.config.bend_feedrate));
            block
        } else {
            vec![
                format!("(Bend {} degrees)", angle),
                format!("G1X{:.5}F{:.3}", angle, self.config.bend_feedrate),
            ]
        };
        self.state.current_angle = angle;
        block
    }

    /// Switch the machine's unit mode
    fn unit(&self, unit: WireUnit) -> Vec<String> {
        vec![
            format!("(Change units to {})", unit.description()),
            unit.gcode_mode().to_string(),
        ]
    }
}
