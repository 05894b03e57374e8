//! Comparison problems: multiplier keywords and more-than/less-than phrases.

use crate::error::EngineError;
use crate::reasoner::parse::ParsedQuery;

use super::{format_number, SolveOutcome};

/// Multiplier keywords, checked in table order - the first keyword found in
/// the text wins regardless of where it appears.
const MULTIPLIER_TABLE: &[(&str, f64)] = &[
    ("twice", 2.0),
    ("double", 2.0),
    ("triple", 3.0),
    ("half", 0.5),
    ("third", 1.0 / 3.0),
    ("quarter", 0.25),
];

pub fn solve(parsed: &ParsedQuery) -> Result<SolveOutcome, EngineError> {
    let query = parsed.normalized.as_str();
    let numbers = &parsed.numbers;

    for (keyword, multiplier) in MULTIPLIER_TABLE {
        if query.contains(keyword) {
            if let Some(&base) = numbers.first() {
                let result = base * multiplier;
                let explanation = format!(
                    "Step 1: Identify the comparison\n  - Base value: {}\n  - Comparison: '{}' means x {}\n\n\
                     Step 2: Calculate\n  - {} x {} = {}\n\nAnswer: {}",
                    format_number(base),
                    keyword,
                    format_number(*multiplier),
                    format_number(base),
                    format_number(*multiplier),
                    format_number(result),
                    format_number(result)
                );
                return Ok(SolveOutcome::new(format_number(result), explanation));
            }
        }
    }

    // "A more than B" adds A to B; "A less than B" subtracts A from B. The
    // second extracted number is the base, the first the delta.
    if query.contains("more than") && numbers.len() >= 2 {
        let result = numbers[1] + numbers[0];
        let explanation = format!(
            "Step 1: '{} more than {}'\nStep 2: Add: {} + {} = {}\n\nAnswer: {}",
            format_number(numbers[0]),
            format_number(numbers[1]),
            format_number(numbers[1]),
            format_number(numbers[0]),
            format_number(result),
            format_number(result)
        );
        return Ok(SolveOutcome::new(format_number(result), explanation));
    }

    if query.contains("less than") && numbers.len() >= 2 {
        let result = numbers[1] - numbers[0];
        let explanation = format!(
            "Step 1: '{} less than {}'\nStep 2: Subtract: {} - {} = {}\n\nAnswer: {}",
            format_number(numbers[0]),
            format_number(numbers[1]),
            format_number(numbers[1]),
            format_number(numbers[0]),
            format_number(result),
            format_number(result)
        );
        return Ok(SolveOutcome::new(format_number(result), explanation));
    }

    Ok(SolveOutcome::error(
        "Could not parse comparison. Try: 'twice 50' or '10 more than 30'",
    ))
}
