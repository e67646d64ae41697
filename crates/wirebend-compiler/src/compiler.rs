//! Compiler facade
//!
//! Sequences the three pipeline stages (parse, expand, generate) and
//! joins the emitted command lines into final output text. The whole
//! compile is a single blocking call with no I/O; reading program
//! text and writing output belong to the caller.

use tracing::debug;
use wirebend_core::Result;

use crate::codegen::CodeGenerator;
use crate::config::{CompilerConfig, ConfigOverrides};
use crate::{expander, parser};

/// Compiles bend-program text into G-code
///
/// Owns the machine configuration. Each [`compile`](Self::compile)
/// call runs the full pipeline against a fresh machine state, so
/// successive programs never contaminate each other; independent
/// compilers may run concurrently without synchronization.
#[derive(Debug, Clone, Default)]
pub struct BendCompiler {
    config: CompilerConfig,
}

impl BendCompiler {
    /// Compiler with the default machine profile
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiler with an explicit configuration
    pub fn with_config(config: CompilerConfig) -> Self {
        Self { config }
    }

    /// Apply a partial configuration override
    ///
    /// Unset fields keep their current values, so successive calls
    /// reconfigure incrementally.
    pub fn set_options(&mut self, overrides: &ConfigOverrides) {
        self.config.apply(overrides);
    }

    /// The configuration used for subsequent compiles
    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Compile program text into newline-joined G-code
    ///
    /// Fails with the first error encountered; a failed compile
    /// produces no output.
    pub fn compile(&self, text: &str) -> Result<String> {
        debug!("Compiling bend program, input size: {} bytes", text.len());
        let program = parser::parse(text)?;
        let expanded = expander::expand(&program)?;
        let lines = CodeGenerator::new(&self.config).generate(&expanded)?;
        Ok(lines.join("\n"))
    }
}
