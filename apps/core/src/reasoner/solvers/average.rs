//! Average problems: arithmetic mean over every extracted number.

use crate::error::EngineError;
use crate::reasoner::parse::ParsedQuery;

use super::{format_number, join_numbers, SolveOutcome};

pub fn solve(parsed: &ParsedQuery) -> Result<SolveOutcome, EngineError> {
    let numbers = &parsed.numbers;

    if numbers.len() < 2 {
        return Ok(SolveOutcome::error(
            "Need at least 2 numbers to calculate average",
        ));
    }

    let total: f64 = numbers.iter().sum();
    let count = numbers.len();
    let average = total / count as f64;

    let explanation = format!(
        "Step 1: List the numbers\n  - Numbers: {}\n\n\
         Step 2: Calculate the sum\n  - Sum: {} = {}\n\n\
         Step 3: Divide by the count\n  - Average: {} / {} = {}\n\nAnswer: {}",
        join_numbers(numbers, ", "),
        join_numbers(numbers, " + "),
        format_number(total),
        format_number(total),
        count,
        format_number(average),
        format_number(average)
    );

    Ok(SolveOutcome::new(format_number(average), explanation))
}
