//! Reasoner Tests
//!
//! End-to-end checks of classification and solving across the seven problem
//! categories, driven through parse -> classify -> dispatch.

use crate::reasoner::solvers::{dispatch, SolveOutcome};
use crate::reasoner::{ProblemClassifier, ProblemKind, QueryParser};

/// Runs a query through parse -> classify -> dispatch.
fn run(query: &str) -> (ProblemKind, SolveOutcome) {
    let parser = QueryParser::new();
    let classifier = ProblemClassifier::new();

    let parsed = parser.parse(query);
    let classification = classifier.classify(&parsed);
    let outcome = dispatch(classification.kind, &parsed)
        .unwrap_or_else(|e| panic!("pipeline error for '{}': {}", query, e));
    (classification.kind, outcome)
}

fn numeric_result(query: &str) -> f64 {
    let (kind, outcome) = run(query);
    outcome.result.parse::<f64>().unwrap_or_else(|_| {
        panic!(
            "expected numeric result for '{}' ({}), got '{}'",
            query, kind, outcome.result
        )
    })
}

#[cfg(test)]
mod classification_tests {
    use super::*;

    #[test]
    fn test_category_assignment() {
        let cases = vec![
            ("What is 20% of 150?", ProblemKind::Percentage),
            ("Solve 2x + 5 = 17", ProblemKind::Equation),
            ("If I work 40 hours at $25/hour, how much do I make?", ProblemKind::Rate),
            ("twice 50", ProblemKind::Comparison),
            ("Start with 100, add 10%, then subtract 30", ProblemKind::MultiStep),
            ("What is 25 + 37?", ProblemKind::Arithmetic),
        ];

        let parser = QueryParser::new();
        let classifier = ProblemClassifier::new();
        for (query, expected) in cases {
            let result = classifier.classify(&parser.parse(query));
            assert_eq!(result.kind, expected, "for '{}'", query);
        }
    }

    #[test]
    fn test_sequential_markers_win_over_percentage() {
        // Both marker families present: rule order must pick multi-step.
        let parser = QueryParser::new();
        let classifier = ProblemClassifier::new();

        let queries = vec![
            "Start with 100, add 10%, then subtract 30",
            "take 50, then apply a 10% discount",
            "first add 5%, finally subtract 2",
        ];
        for query in queries {
            let result = classifier.classify(&parser.parse(query));
            assert_eq!(result.kind, ProblemKind::MultiStep, "for '{}'", query);
        }
    }

    #[test]
    fn test_confidence_values_match_rules() {
        let parser = QueryParser::new();
        let classifier = ProblemClassifier::new();

        let cases: Vec<(&str, f32)> = vec![
            ("add 1 then add 2", 0.95),
            ("What is 20% of 150?", 0.95),
            ("twice 50", 0.90),
            ("earn 25 per hour for 40 hours", 0.92),
            ("25 and 37", 0.70),
            ("nothing here", 0.50),
        ];
        for (query, expected) in cases {
            let result = classifier.classify(&parser.parse(query));
            assert!(
                (result.confidence - expected).abs() < f32::EPSILON,
                "confidence for '{}' was {}",
                query,
                result.confidence
            );
        }
    }
}

#[cfg(test)]
mod solver_tests {
    use super::*;

    #[test]
    fn test_percentage_of() {
        // (X / 100) * Y within floating-point tolerance.
        let cases = vec![
            ("What is 20% of 150?", 30.0),
            ("What is 20% of 80?", 16.0),
            ("What is 7.5% of 200?", 15.0),
        ];
        for (query, expected) in cases {
            assert!(
                (numeric_result(query) - expected).abs() < 1e-9,
                "for '{}'",
                query
            );
        }
    }

    #[test]
    fn test_percentage_increase() {
        assert!((numeric_result("Increase 200 by 15%") - 230.0).abs() < 1e-9);
    }

    #[test]
    fn test_comparison_table() {
        assert_eq!(numeric_result("twice 50"), 100.0);
        assert_eq!(numeric_result("half of 200"), 100.0);
    }

    #[test]
    fn test_comparison_operand_reversal() {
        // "A more than B" is B + A; "A less than B" is B - A.
        assert_eq!(numeric_result("10 more than 30"), 40.0);
        assert_eq!(numeric_result("5 less than 20"), 15.0);
    }

    #[test]
    fn test_equation_solution() {
        let (kind, outcome) = run("Solve 2x + 5 = 17");
        assert_eq!(kind, ProblemKind::Equation);
        assert!((outcome.result.parse::<f64>().unwrap() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_multi_step_chain() {
        // 100 + 10% = 110, then 110 - 30 = 80.
        let (kind, outcome) = run("Start with 100, add 10%, then subtract 30");
        assert_eq!(kind, ProblemKind::MultiStep);
        assert_eq!(outcome.result, "80");
    }

    #[test]
    fn test_average_over_all_numbers() {
        let (kind, outcome) = run("average of 10, 20, 30, 40");
        // "," is also a sequential splitter in multi-step problems, but the
        // stats marker only wins when no sequential marker is present.
        assert_eq!(kind, ProblemKind::Average);
        assert!((outcome.result.parse::<f64>().unwrap() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_rate_wage_query() {
        let (kind, outcome) = run("If I work 40 hours at $25/hour, how much do I make?");
        assert_eq!(kind, ProblemKind::Rate);
        assert_eq!(outcome.result, "$1,000.00");
    }

    #[test]
    fn test_arithmetic_with_operators() {
        assert_eq!(numeric_result("What is 25 + 37?"), 62.0);
        assert_eq!(numeric_result("What is 6 times 7?"), 42.0);
    }

    #[test]
    fn test_arithmetic_under_two_numbers_is_error_outcome() {
        // Never a panic or a pipeline error, always an Error outcome.
        let queries = vec!["what is 42", "tell me about 7", "nothing numeric at all"];
        for query in queries {
            let (kind, outcome) = run(query);
            assert_eq!(kind, ProblemKind::Arithmetic, "for '{}'", query);
            assert!(outcome.is_error(), "for '{}'", query);
            assert!(!outcome.explanation.is_empty(), "for '{}'", query);
        }
    }

    #[test]
    fn test_explanations_are_never_empty() {
        let queries = vec![
            "What is 20% of 150?",
            "twice 50",
            "Solve 2x + 5 = 17",
            "average of 1, 2, 3",
            "what is 42",
            "more than",
        ];
        for query in queries {
            let (_, outcome) = run(query);
            assert!(!outcome.explanation.is_empty(), "for '{}'", query);
        }
    }
}
