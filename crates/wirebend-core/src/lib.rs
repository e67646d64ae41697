//! # WireBend Core
//!
//! Core types for the WireBend bend-program compiler: the instruction
//! model shared by the pipeline stages, the unit system, and the
//! error taxonomy.

pub mod error;
pub mod instruction;
pub mod units;

pub use error::{CompileError, ParseError, Result, StructureError};
pub use instruction::{Instruction, Program, ProgramLine};
pub use units::WireUnit;
