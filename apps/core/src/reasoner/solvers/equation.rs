//! Equation problems: linear symbolic solving over `x` and `y`.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::error::EngineError;
use crate::reasoner::algebra::{self, Solution};
use crate::reasoner::parse::ParsedQuery;

use super::{format_number, SolveOutcome};

// Rewrites implicit multiplication for a single digit directly before a
// variable: "2x" -> "2*x".
static IMPLICIT_MUL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d)([xy])").expect("Invalid regex: implicit multiplication"));

const FILLER_PHRASES: &[&str] = &["solve", "find x", "find y"];

const GUIDANCE: &str = "Try: 'solve 2x + 5 = 17'";

pub fn solve(parsed: &ParsedQuery) -> Result<SolveOutcome, EngineError> {
    let query = parsed.normalized.as_str();

    if !query.contains('=') {
        return Ok(SolveOutcome::error("Equation must contain '=' sign"));
    }

    let mut cleaned = query.to_string();
    for phrase in FILLER_PHRASES {
        cleaned = cleaned.replace(phrase, "");
    }

    // Split on the first '='; a second '=' lands in the right-hand side and
    // fails the parse below.
    let Some((left_raw, right_raw)) = cleaned.trim().split_once('=') else {
        return Ok(SolveOutcome::error("Equation must contain '=' sign"));
    };

    let left_src = IMPLICIT_MUL.replace_all(left_raw.trim(), "$1*$2");
    let right_src = IMPLICIT_MUL.replace_all(right_raw.trim(), "$1*$2");

    let sides = algebra::parse(&left_src).and_then(|l| algebra::parse(&right_src).map(|r| (l, r)));
    let (left, right) = match sides {
        Ok(sides) => sides,
        Err(err) => {
            debug!("equation parse failed: {}", err);
            return Ok(SolveOutcome::error(format!(
                "Could not solve equation: {}\n{}",
                err, GUIDANCE
            )));
        }
    };

    let mut explanation = format!(
        "Step 1: Parse equation\n  - Left side: {}\n  - Right side: {}\n\n",
        left, right
    );

    match algebra::solve_equality(left, right) {
        Solution::Unique(value) => {
            let result = format_number(value);
            explanation.push_str(&format!(
                "Step 2: Rearrange and solve\n  - Equation: {} = {}\n  - Solution: {}\n\nAnswer: {}",
                left, right, result, result
            ));
            Ok(SolveOutcome::new(result, explanation))
        }
        Solution::Parametric(expr) => {
            explanation.push_str(&format!(
                "Step 2: Rearrange and solve\n  - Equation: {} = {}\n  - Solution: x = {}\n\nAnswer: {}",
                left, right, expr, expr
            ));
            Ok(SolveOutcome::new(expr, explanation))
        }
        Solution::Empty => {
            explanation.push_str(&format!(
                "Step 2: Rearrange and solve\n  - Equation: {} = {}\n  - Solution: none\n",
                left, right
            ));
            Ok(SolveOutcome::new("No solution", explanation))
        }
    }
}
