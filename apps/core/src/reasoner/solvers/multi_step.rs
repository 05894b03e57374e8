//! Sequential problems: a chain of operations over a running total.
//!
//! The first extracted number seeds the accumulator; the text is split on
//! step markers and each later segment applies at most one operation chosen
//! by keyword precedence. Segments with no operation keyword are skipped
//! without a warning.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::error::EngineError;
use crate::reasoner::parse::{extract_numbers, ParsedQuery};

use super::{format_number, SolveOutcome};

static STEP_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"then|after that|next|,").expect("Invalid regex: step split"));

pub fn solve(parsed: &ParsedQuery) -> Result<SolveOutcome, EngineError> {
    let Some(&start) = parsed.numbers.first() else {
        return Ok(SolveOutcome::error("Need at least one starting number"));
    };

    let mut total = start;
    let mut explanation = format!("Step 1: Starting value = {}\n\n", format_number(total));
    let mut step_num = 2;

    // The first segment holds the starting value and nothing else.
    for segment in STEP_SPLIT.split(&parsed.normalized).skip(1) {
        let segment = segment.trim();
        let Some(&value) = extract_numbers(segment).first() else {
            continue;
        };

        let percent_step = segment.contains('%') || segment.contains("percent");

        if segment.contains("add") || segment.contains("plus") || segment.contains('+') {
            if percent_step {
                let change = total * (value / 100.0);
                total += change;
                explanation.push_str(&format!(
                    "Step {}: Add {}%\n  - {} + {} = {}\n\n",
                    step_num,
                    format_number(value),
                    format_number(total - change),
                    format_number(change),
                    format_number(total)
                ));
            } else {
                let previous = total;
                total += value;
                explanation.push_str(&format!(
                    "Step {}: Add {}\n  - {} + {} = {}\n\n",
                    step_num,
                    format_number(value),
                    format_number(previous),
                    format_number(value),
                    format_number(total)
                ));
            }
        } else if segment.contains("subtract") || segment.contains("minus") || segment.contains('-')
        {
            if percent_step {
                let change = total * (value / 100.0);
                total -= change;
                explanation.push_str(&format!(
                    "Step {}: Subtract {}%\n  - {} - {} = {}\n\n",
                    step_num,
                    format_number(value),
                    format_number(total + change),
                    format_number(change),
                    format_number(total)
                ));
            } else {
                let previous = total;
                total -= value;
                explanation.push_str(&format!(
                    "Step {}: Subtract {}\n  - {} - {} = {}\n\n",
                    step_num,
                    format_number(value),
                    format_number(previous),
                    format_number(value),
                    format_number(total)
                ));
            }
        } else if segment.contains("multiply") || segment.contains("times") || segment.contains('*')
        {
            let previous = total;
            total *= value;
            explanation.push_str(&format!(
                "Step {}: Multiply by {}\n  - {} x {} = {}\n\n",
                step_num,
                format_number(value),
                format_number(previous),
                format_number(value),
                format_number(total)
            ));
        } else if segment.contains("divide") || segment.contains('/') {
            if value == 0.0 {
                return Err(EngineError::Math(
                    "division by zero in a chained step".to_string(),
                ));
            }
            let previous = total;
            total /= value;
            explanation.push_str(&format!(
                "Step {}: Divide by {}\n  - {} / {} = {}\n\n",
                step_num,
                format_number(value),
                format_number(previous),
                format_number(value),
                format_number(total)
            ));
        }
        // No operation keyword: the segment is dropped, but it still
        // consumes a step number.

        step_num += 1;
    }

    debug!("multi-step solver finished at {}", total);
    explanation.push_str(&format!("Final answer: {}", format_number(total)));
    Ok(SolveOutcome::new(format_number(total), explanation))
}
