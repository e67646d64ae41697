//! # WireBend Compiler
//!
//! The three-stage pipeline turning bend-program text into G-code for
//! a CNC wire bender: line-oriented parsing, repeat-block expansion,
//! and stateful code generation behind the [`BendCompiler`] facade.
//!
//! ```
//! use wirebend_compiler::BendCompiler;
//!
//! let compiler = BendCompiler::new();
//! let gcode = compiler.compile("UNIT MM\nFEED 10\nBEND 90").unwrap();
//! assert!(gcode.contains("G21"));
//! ```

pub mod codegen;
pub mod compiler;
pub mod config;
pub mod expander;
pub mod parser;

pub use codegen::{CodeGenerator, MachineState};
pub use compiler::BendCompiler;
pub use config::{CompilerConfig, ConfigOverrides};
pub use expander::expand;
pub use parser::parse;
