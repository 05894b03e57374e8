//! Problem-type classification.
//!
//! Applies an ordered set of keyword rules to a parsed query and returns a
//! category with a confidence score. First match wins, no backtracking; the
//! rule order resolves overlaps (a query with both sequential and percentage
//! cues is multi-step, never percentage).

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::parse::ParsedQuery;

/// Closed set of word-problem categories. Dispatch over this enum is an
/// exhaustive match, so adding a category requires wiring a solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemKind {
    Percentage,
    Equation,
    Rate,
    Comparison,
    MultiStep,
    Average,
    Arithmetic,
}

impl ProblemKind {
    /// Returns a human-readable label for the category.
    pub fn label(&self) -> &'static str {
        match self {
            ProblemKind::Percentage => "percentage",
            ProblemKind::Equation => "equation",
            ProblemKind::Rate => "rate",
            ProblemKind::Comparison => "comparison",
            ProblemKind::MultiStep => "multi_step",
            ProblemKind::Average => "average",
            ProblemKind::Arithmetic => "arithmetic",
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of classification: category plus an advisory confidence in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub kind: ProblemKind,
    pub confidence: f32,
}

// Rule marker tables, one per priority tier. Kept as data so the tables are
// independently testable.
const SEQUENTIAL_MARKERS: &[&str] = &["then", "after that", "first", "next", "finally"];
const PERCENT_MARKERS: &[&str] = &["%", "percent", "percentage", "discount", "tax", "tip"];
const COMPARISON_MARKERS: &[&str] = &[
    "twice",
    "double",
    "triple",
    "half",
    "times as much",
    "more than",
    "less than",
];
const RATE_INDICATORS: &[&str] = &["per", "an hour", "per hour", "each", "at"];
const WORK_CONTEXT: &[&str] = &[
    "work", "worked", "earn", "make", "buy", "cost", "speed", "dollar", "$",
];
const STATS_MARKERS: &[&str] = &["average", "mean", "median"];

fn contains_any(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| text.contains(marker))
}

/// Keyword-rule classifier over parsed queries.
pub struct ProblemClassifier;

impl Default for ProblemClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ProblemClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a parsed query. Rules are evaluated in fixed priority order:
    /// sequential, percentage, equation, comparison, rate, average, then the
    /// arithmetic default.
    pub fn classify(&self, parsed: &ParsedQuery) -> Classification {
        let text = parsed.normalized.as_str();

        let classification = if contains_any(text, SEQUENTIAL_MARKERS) {
            Classification {
                kind: ProblemKind::MultiStep,
                confidence: 0.95,
            }
        } else if contains_any(text, PERCENT_MARKERS) {
            Classification {
                kind: ProblemKind::Percentage,
                confidence: 0.95,
            }
        } else if parsed.has_variable && text.contains('=') {
            Classification {
                kind: ProblemKind::Equation,
                confidence: 0.95,
            }
        } else if contains_any(text, COMPARISON_MARKERS) {
            Classification {
                kind: ProblemKind::Comparison,
                confidence: 0.90,
            }
        } else if contains_any(text, RATE_INDICATORS) && contains_any(text, WORK_CONTEXT) {
            Classification {
                kind: ProblemKind::Rate,
                confidence: 0.92,
            }
        } else if contains_any(text, STATS_MARKERS) {
            Classification {
                kind: ProblemKind::Average,
                confidence: 0.95,
            }
        } else {
            // Default tier: confidence depends on whether there is enough
            // numeric material to work with.
            let confidence = if parsed.numbers.len() >= 2 { 0.70 } else { 0.50 };
            Classification {
                kind: ProblemKind::Arithmetic,
                confidence,
            }
        };

        debug!(
            "classified as {} with confidence {:.2}",
            classification.kind, classification.confidence
        );

        classification
    }
}
