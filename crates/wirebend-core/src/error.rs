//! Error types for the WireBend compiler
//!
//! Provides structured error types for the two fallible pipeline
//! stages:
//! - Parse errors (a line matches no recognized statement shape)
//! - Structure errors (mismatched `REPEAT`/`END` pairs)
//!
//! All error types use `thiserror` and carry the 0-based source line
//! index so an operator can locate the offending line. Every error is
//! terminal for the compile call: no stage attempts recovery or
//! partial output.

use thiserror::Error;

/// Errors raised while parsing bend-program text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A line matched none of the recognized statement shapes
    #[error("Syntax error at line {line}")]
    Syntax {
        /// 0-based index of the offending input line.
        line: usize,
    },
}

/// Errors raised while expanding repeat blocks
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// An `END` appeared with no open `REPEAT`
    #[error("END without REPEAT at line {line}")]
    UnmatchedEnd {
        /// 0-based source line of the unmatched `END`.
        line: usize,
    },

    /// A `REPEAT` was never closed by a matching `END`
    #[error("REPEAT without END at line {line}")]
    UnmatchedRepeat {
        /// 0-based source line of the unclosed `REPEAT`.
        line: usize,
    },
}

/// Unified error type for a whole compile call
///
/// The caller receives the first error encountered; a failed compile
/// produces no partial output, since partial G-code is meaningless to
/// a physical machine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// Parse stage failure
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Expansion stage failure
    #[error(transparent)]
    Structure(#[from] StructureError),

    /// A control-flow instruction reached code generation
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CompileError {
    /// Source line the error is attributed to, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Parse(ParseError::Syntax { line })
            | Self::Structure(StructureError::UnmatchedEnd { line })
            | Self::Structure(StructureError::UnmatchedRepeat { line }) => Some(*line),
            Self::Internal(_) => None,
        }
    }
}

/// Result type using CompileError
pub type Result<T> = std::result::Result<T, CompileError>;
