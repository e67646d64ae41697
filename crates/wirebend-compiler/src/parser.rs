//! Bend-program parser
//!
//! Classifies each input line into exactly one [`Instruction`],
//! attaching the 0-based source line index for error reporting.
//! Matching is case-insensitive and whitespace-tolerant; statement
//! shapes are tried in a fixed precedence order and the first match
//! wins. Shapes are searched, not anchored to the whole line, so a
//! keyword anywhere in the line can match.
//!
//! Every input line produces exactly one instruction (blank lines and
//! comments become [`Instruction::Comment`]); the first unrecognized
//! line aborts the parse.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;
use wirebend_core::{Instruction, ParseError, Program, ProgramLine, WireUnit};

fn bend_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"bend\s+(-?\d+(?:\.\d+)?)").expect("invalid regex pattern"))
}

fn feed_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"feed\s+(-?\d+(?:\.\d+)?)").expect("invalid regex pattern"))
}

fn unit_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Longest synonym first so the whole word is captured.
        Regex::new(r"unit\s+(inches|inch|in|millimeters|millimeter|mm)\b")
            .expect("invalid regex pattern")
    })
}

fn repeat_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"repeat\s+(\d+):").expect("invalid regex pattern"))
}

/// Parse raw program text into an ordered instruction list
///
/// Fails fast with the 0-based line index of the first line matching
/// none of the recognized statement shapes.
pub fn parse(text: &str) -> Result<Program, ParseError> {
    let mut program = Program::new();
    for (index, raw) in text.split('\n').enumerate() {
        let line = raw.trim().to_lowercase();
        let instruction = classify(&line).ok_or(ParseError::Syntax { line: index })?;
        program.push(ProgramLine::new(instruction, index));
    }
    debug!("Parsed {} instructions from {} bytes", program.len(), text.len());
    Ok(program)
}

/// Classify one trimmed, lowercased line, first match wins
fn classify(line: &str) -> Option<Instruction> {
    if let Some(caps) = bend_pattern().captures(line) {
        return caps[1].parse().ok().map(Instruction::Bend);
    }
    if let Some(caps) = feed_pattern().captures(line) {
        return caps[1].parse().ok().map(Instruction::Feed);
    }
    if let Some(caps) = unit_pattern().captures(line) {
        return caps[1].parse::<WireUnit>().ok().map(Instruction::Unit);
    }
    if let Some(caps) = repeat_pattern().captures(line) {
        // The digit-only capture can still overflow the counter width.
        return caps[1].parse().ok().map(Instruction::Repeat);
    }
    if line.contains("end") {
        return Some(Instruction::End);
    }
    if line.contains("//") || line.contains('\'') || line.is_empty() {
        return Some(Instruction::Comment);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instructions(text: &str) -> Vec<Instruction> {
        parse(text)
            .unwrap()
            .into_iter()
            .map(|entry| entry.instruction)
            .collect()
    }

    #[test]
    fn test_bend_and_feed() {
        assert_eq!(instructions("BEND 90"), vec![Instruction::Bend(90.0)]);
        assert_eq!(instructions("bend -15.5"), vec![Instruction::Bend(-15.5)]);
        assert_eq!(instructions("FEED 1"), vec![Instruction::Feed(1.0)]);
        assert_eq!(instructions("feed -0.25"), vec![Instruction::Feed(-0.25)]);
    }

    #[test]
    fn test_whitespace_tolerance() {
        assert_eq!(instructions("  FEED    2.5  "), vec![Instruction::Feed(2.5)]);
        assert_eq!(instructions("\tBEND\t45"), vec![Instruction::Bend(45.0)]);
    }

    #[test]
    fn test_unit_synonyms() {
        for text in ["UNIT INCH", "unit inches", "Unit In"] {
            assert_eq!(instructions(text), vec![Instruction::Unit(WireUnit::In)]);
        }
        for text in ["UNIT MM", "unit millimeter", "UNIT millimeters"] {
            assert_eq!(instructions(text), vec![Instruction::Unit(WireUnit::Mm)]);
        }
    }

    #[test]
    fn test_unrecognized_unit_word_falls_through() {
        assert_eq!(
            parse("UNIT furlongs"),
            Err(ParseError::Syntax { line: 0 })
        );
        // A recognized prefix is not enough; the synonym must end at a
        // word boundary.
        assert_eq!(parse("UNIT index"), Err(ParseError::Syntax { line: 0 }));
    }

    #[test]
    fn test_repeat_requires_colon() {
        assert_eq!(instructions("REPEAT 4:"), vec![Instruction::Repeat(4)]);
        assert_eq!(instructions("repeat  0:"), vec![Instruction::Repeat(0)]);
        assert_eq!(parse("REPEAT 4"), Err(ParseError::Syntax { line: 0 }));
    }

    #[test]
    fn test_repeat_count_overflow() {
        assert_eq!(
            parse("REPEAT 99999999999999999999:"),
            Err(ParseError::Syntax { line: 0 })
        );
    }

    #[test]
    fn test_end_is_searched_not_anchored() {
        assert_eq!(instructions("END"), vec![Instruction::End]);
        assert_eq!(instructions("  end  "), vec![Instruction::End]);
        // Any line containing the token matches once nothing earlier
        // in the precedence order does.
        assert_eq!(instructions("append 5"), vec![Instruction::End]);
    }

    #[test]
    fn test_bend_wins_over_end() {
        // "bend 90" contains "end" but the bend shape is tried first.
        assert_eq!(instructions("bend 90"), vec![Instruction::Bend(90.0)]);
        // A bare "bend" has no number, so it falls through to the end
        // token search.
        assert_eq!(instructions("bend"), vec![Instruction::End]);
    }

    #[test]
    fn test_comments_and_blank_lines() {
        assert_eq!(instructions("// set up the coil"), vec![Instruction::Comment]);
        assert_eq!(instructions("' legacy comment"), vec![Instruction::Comment]);
        assert_eq!(instructions(""), vec![Instruction::Comment]);
        assert_eq!(instructions("   "), vec![Instruction::Comment]);
    }

    #[test]
    fn test_syntax_error_carries_line_index() {
        assert_eq!(
            parse("FEED 1\nFOO BAR\nBEND 90"),
            Err(ParseError::Syntax { line: 1 })
        );
    }

    #[test]
    fn test_one_instruction_per_line() {
        let program = parse("UNIT INCH\nREPEAT 2:\nFEED 1\nBEND 90\nEND").unwrap();
        assert_eq!(program.len(), 5);
        for (index, entry) in program.iter().enumerate() {
            assert_eq!(entry.line, index);
        }
    }
}
