//! Percentage problems: "X% of Y", increases, and decreases.

use crate::error::EngineError;
use crate::reasoner::parse::ParsedQuery;

use super::{format_number, SolveOutcome};

const INCREASE_MARKERS: &[&str] = &["increase", "raise", "add"];
const DECREASE_MARKERS: &[&str] = &["decrease", "discount", "reduce"];

pub fn solve(parsed: &ParsedQuery) -> Result<SolveOutcome, EngineError> {
    let query = parsed.normalized.as_str();
    let numbers = &parsed.numbers;

    if numbers.len() < 2 {
        return Ok(SolveOutcome::error(
            "Need at least 2 numbers for percentage problems",
        ));
    }

    // Pattern 1: "X% of Y".
    if query.contains("of") {
        let percent = numbers[0];
        let value = numbers[1];
        let result = (percent / 100.0) * value;

        let explanation = format!(
            "Step 1: Identify percentage and value\n  - Percentage: {}%\n  - Value: {}\n\n\
             Step 2: Convert percentage to decimal\n  - {}% = {} / 100 = {}\n\n\
             Step 3: Multiply\n  - {} x {} = {}\n\nAnswer: {}",
            format_number(percent),
            format_number(value),
            format_number(percent),
            format_number(percent),
            format_number(percent / 100.0),
            format_number(percent / 100.0),
            format_number(value),
            format_number(result),
            format_number(result)
        );
        return Ok(SolveOutcome::new(format_number(result), explanation));
    }

    // Pattern 2: "increase/decrease by X%". When only one number follows the
    // trigger, the value doubles as its own percent - observed behavior,
    // kept as-is.
    if INCREASE_MARKERS.iter().any(|m| query.contains(m)) {
        let value = numbers[0];
        let percent = numbers.get(1).copied().unwrap_or(value);
        let change = (percent / 100.0) * value;
        let result = value + change;

        let explanation = format!(
            "Step 1: Calculate {}% of {}\n  - {} / 100 x {} = {}\n\n\
             Step 2: Add to original\n  - {} + {} = {}\n\nAnswer: {}",
            format_number(percent),
            format_number(value),
            format_number(percent),
            format_number(value),
            format_number(change),
            format_number(value),
            format_number(change),
            format_number(result),
            format_number(result)
        );
        return Ok(SolveOutcome::new(format_number(result), explanation));
    }

    if DECREASE_MARKERS.iter().any(|m| query.contains(m)) {
        let value = numbers[0];
        let percent = numbers.get(1).copied().unwrap_or(value);
        let change = (percent / 100.0) * value;
        let result = value - change;

        let explanation = format!(
            "Step 1: Calculate {}% of {}\n  - {} / 100 x {} = {}\n\n\
             Step 2: Subtract from original\n  - {} - {} = {}\n\nAnswer: {}",
            format_number(percent),
            format_number(value),
            format_number(percent),
            format_number(value),
            format_number(change),
            format_number(value),
            format_number(change),
            format_number(result),
            format_number(result)
        );
        return Ok(SolveOutcome::new(format_number(result), explanation));
    }

    // Default: treat as "X% of Y".
    let result = (numbers[0] / 100.0) * numbers[1];
    let explanation = format!(
        "Calculating {}% of {} = {}\n\nAnswer: {}",
        format_number(numbers[0]),
        format_number(numbers[1]),
        format_number(result),
        format_number(result)
    );
    Ok(SolveOutcome::new(format_number(result), explanation))
}
