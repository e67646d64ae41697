//! Repeat-block expansion
//!
//! Eliminates `REPEAT`/`END` pairs by walking the program with an
//! explicit instruction pointer and a stack of open repeats, rather
//! than by rewriting a nested tree: repeat pairs are matched by
//! control meaning, which need not follow source nesting.
//!
//! On every `END` the walk consults the *oldest* open repeat (the
//! bottom of the stack, not the top). Nested repeat blocks therefore
//! share that entry's counter instead of counting independently;
//! programs in the field rely on this, so it is preserved as-is. See
//! DESIGN.md.

use tracing::debug;
use wirebend_core::{Instruction, Program, StructureError};

/// Expand all repeat blocks into a flat program
///
/// The output contains only content instructions (`UNIT`, `FEED`,
/// `BEND`, and pass-through comments). A `REPEAT n:` body is emitted
/// exactly `n` times; `REPEAT 0:` skips its body entirely.
///
/// Termination is guaranteed: each open repeat's remaining count
/// strictly decreases across visits to its `END`, bounding the walk
/// by the sum of declared counts plus the program length.
pub fn expand(program: &Program) -> Result<Program, StructureError> {
    // (pc of the REPEAT, remaining jumps back to it)
    let mut stack: Vec<(usize, u32)> = Vec::new();
    let mut output = Program::new();
    let mut pc = 0;

    while pc < program.len() {
        let entry = &program[pc];
        match entry.instruction {
            Instruction::Repeat(0) => {
                // Zero iterations: skip forward past the closing END
                // without opening an entry.
                match program[pc + 1..]
                    .iter()
                    .position(|candidate| candidate.instruction == Instruction::End)
                {
                    Some(offset) => pc += offset + 1,
                    None => {
                        return Err(StructureError::UnmatchedRepeat { line: entry.line });
                    }
                }
            }
            Instruction::Repeat(count) => stack.push((pc, count - 1)),
            Instruction::End => {
                let Some(&(repeat_pc, remaining)) = stack.first() else {
                    return Err(StructureError::UnmatchedEnd { line: entry.line });
                };
                if remaining > 0 {
                    stack[0].1 = remaining - 1;
                    // Resume just after the recorded REPEAT; inner
                    // REPEAT lines in the body re-push as the walk
                    // passes them again.
                    pc = repeat_pc;
                } else {
                    stack.pop();
                }
            }
            _ => output.push(*entry),
        }
        pc += 1;
    }

    if let Some(&(repeat_pc, _)) = stack.last() {
        return Err(StructureError::UnmatchedRepeat {
            line: program[repeat_pc].line,
        });
    }

    debug!(
        "Expanded {} instructions to {}",
        program.len(),
        output.len()
    );
    Ok(output)
}
