//! Rate problems: rate x quantity = total (wages, unit pricing, speed).

use tracing::debug;

use crate::error::EngineError;
use crate::reasoner::parse::ParsedQuery;

use super::{format_currency, format_number, SolveOutcome};

// Context words change the wording of the explanation, never the arithmetic.
const WAGE_CONTEXT: &[&str] = &["work", "worked", "earn", "make", "pay", "wage", "salary"];
const SHOPPING_CONTEXT: &[&str] = &["buy", "bought", "purchase", "item", "cost"];

pub fn solve(parsed: &ParsedQuery) -> Result<SolveOutcome, EngineError> {
    let numbers = &parsed.numbers;
    if numbers.len() < 2 {
        return Ok(SolveOutcome::error(
            "Need at least 2 numbers for rate problems (rate and quantity)",
        ));
    }

    let rate = numbers[0];
    let quantity = numbers[1];
    let query = parsed.normalized.as_str();

    let wage_context = WAGE_CONTEXT.iter().any(|w| query.contains(w));
    let shopping_context = SHOPPING_CONTEXT.iter().any(|w| query.contains(w));

    let total = rate * quantity;
    debug!("rate solver: {} x {} = {}", rate, quantity, total);

    let mut explanation = String::from("Step 1: Identify the rate and quantity\n");
    if wage_context {
        explanation.push_str(&format!(
            "  - Rate: ${}/hour\n  - Hours worked: {}\n",
            format_number(rate),
            format_number(quantity)
        ));
    } else if shopping_context {
        explanation.push_str(&format!(
            "  - Price per item: ${}\n  - Number of items: {}\n",
            format_number(rate),
            format_number(quantity)
        ));
    } else {
        explanation.push_str(&format!(
            "  - Rate: {}\n  - Quantity: {}\n",
            format_number(rate),
            format_number(quantity)
        ));
    }

    explanation.push_str(&format!(
        "\nStep 2: Apply the formula: total = rate x quantity\n  - {} x {} = {}\n",
        format_number(rate),
        format_number(quantity),
        format_number(total)
    ));

    let currency = parsed.original.contains('$') || query.contains("dollar");
    let result = if currency {
        format_currency(total)
    } else {
        format_number(total)
    };

    explanation.push_str(&format!("\nAnswer: {}", result));
    Ok(SolveOutcome::new(result, explanation))
}
