//! Solving strategies.
//!
//! One module per strategy, each a pure function from a [`ParsedQuery`] to a
//! [`SolveOutcome`]. `dispatch` routes a classified query to exactly one
//! solver via an exhaustive match over [`ProblemKind`].

pub mod arithmetic;
pub mod average;
pub mod comparison;
pub mod equation;
pub mod multi_step;
pub mod percentage;
pub mod rate;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

use super::classify::ProblemKind;
use super::parse::ParsedQuery;

/// Literal result marker for solver-local failures.
pub const ERROR_RESULT: &str = "Error";

/// Result of one solving attempt: a result string (a formatted number, a
/// currency amount, or the `"Error"` marker) and a narrated explanation.
/// The explanation is never empty, even on error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveOutcome {
    pub result: String,
    pub explanation: String,
}

impl SolveOutcome {
    pub fn new(result: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            result: result.into(),
            explanation: explanation.into(),
        }
    }

    /// A solver-local failure with guidance for the user.
    pub fn error(explanation: impl Into<String>) -> Self {
        Self {
            result: ERROR_RESULT.to_string(),
            explanation: explanation.into(),
        }
    }

    #[allow(dead_code)]
    pub fn is_error(&self) -> bool {
        self.result == ERROR_RESULT
    }
}

/// Route a classified query to its solver.
pub fn dispatch(kind: ProblemKind, parsed: &ParsedQuery) -> Result<SolveOutcome, EngineError> {
    match kind {
        ProblemKind::Percentage => percentage::solve(parsed),
        ProblemKind::Equation => equation::solve(parsed),
        ProblemKind::Rate => rate::solve(parsed),
        ProblemKind::Comparison => comparison::solve(parsed),
        ProblemKind::MultiStep => multi_step::solve(parsed),
        ProblemKind::Average => average::solve(parsed),
        ProblemKind::Arithmetic => arithmetic::solve(parsed),
    }
}

/// Formats a numeric result: whole values print without a fractional part,
/// everything else keeps its decimals trimmed of trailing zeros.
pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.10}", value)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

/// Formats a currency amount: two decimals and thousands separators.
pub(crate) fn format_currency(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    // A "{:.2}" rendering always contains the decimal point.
    let (int_part, frac_part) = formatted.split_once('.').expect("two-decimal format");

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (index, digit) in int_part.chars().enumerate() {
        if index != 0 && (int_part.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, frac_part)
}

/// Joins numbers for explanation text ("10 + 20 + 30").
pub(crate) fn join_numbers(numbers: &[f64], separator: &str) -> String {
    numbers
        .iter()
        .map(|n| format_number(*n))
        .collect::<Vec<_>>()
        .join(separator)
}
