//! Generic arithmetic fallback.
//!
//! Strips question filler, substitutes word operators, and evaluates the
//! remaining expression. A parse failure falls back to summing every
//! extracted number; the fallback itself cannot fail.

use tracing::debug;

use crate::error::EngineError;
use crate::reasoner::parse::ParsedQuery;

use super::{format_number, join_numbers, SolveOutcome};

// Removed as plain substrings, in order - deliberately crude, matching the
// rest of the keyword handling.
const FILLER_WORDS: &[&str] = &["what", "is", "calculate", "compute", "?", "the"];

const WORD_OPERATORS: &[(&str, &str)] = &[
    ("plus", "+"),
    ("minus", "-"),
    ("times", "*"),
    ("divided by", "/"),
];

pub fn solve(parsed: &ParsedQuery) -> Result<SolveOutcome, EngineError> {
    let numbers = &parsed.numbers;

    if numbers.len() < 2 {
        return Ok(SolveOutcome::error("Need at least 2 numbers for arithmetic"));
    }

    let mut cleaned = parsed.normalized.clone();
    for word in FILLER_WORDS {
        cleaned = cleaned.replace(word, "");
    }
    for (word, op) in WORD_OPERATORS {
        cleaned = cleaned.replace(word, op);
    }
    let cleaned = cleaned.trim().to_string();

    // Two-step attempt: structured evaluation first, defined fallback on a
    // parse failure.
    match meval::eval_str(&cleaned) {
        Ok(value) => {
            let explanation = format!(
                "Step 1: Parse expression\n  - Expression: {}\n\n\
                 Step 2: Evaluate\n  - Result: {}\n\nAnswer: {}",
                cleaned,
                format_number(value),
                format_number(value)
            );
            Ok(SolveOutcome::new(format_number(value), explanation))
        }
        Err(err) => {
            debug!("expression evaluation failed ({}), summing instead", err);
            let total: f64 = numbers.iter().sum();
            let explanation = format!(
                "Could not parse an expression; summing the numbers instead:\n{} = {}\n\nAnswer: {}",
                join_numbers(numbers, " + "),
                format_number(total),
                format_number(total)
            );
            Ok(SolveOutcome::new(format_number(total), explanation))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reasoner::parse::QueryParser;

    fn solve_query(query: &str) -> SolveOutcome {
        solve(&QueryParser::new().parse(query)).unwrap()
    }

    #[test]
    fn test_plain_expression() {
        let outcome = solve_query("What is 25 + 37?");
        assert_eq!(outcome.result.parse::<f64>().unwrap(), 62.0);
    }

    #[test]
    fn test_word_operators() {
        let outcome = solve_query("12 times 3");
        assert_eq!(outcome.result.parse::<f64>().unwrap(), 36.0);

        let outcome = solve_query("100 divided by 4");
        assert_eq!(outcome.result.parse::<f64>().unwrap(), 25.0);
    }

    #[test]
    fn test_fallback_sums_numbers() {
        // No recoverable expression once the words are gone.
        let outcome = solve_query("we counted 7 sheep and 12 goats and 4 cows");
        assert_eq!(outcome.result.parse::<f64>().unwrap(), 23.0);
        assert!(outcome.explanation.contains("summing"));
    }

    #[test]
    fn test_fallback_never_fails() {
        let outcome = solve_query("roughly 3 and maybe 9 but who knows");
        assert!(!outcome.is_error());
        assert_eq!(outcome.result.parse::<f64>().unwrap(), 12.0);
    }

    #[test]
    fn test_insufficient_numbers() {
        let outcome = solve_query("what is 42");
        assert!(outcome.is_error());
        assert!(outcome.explanation.contains("at least 2 numbers"));
    }
}
