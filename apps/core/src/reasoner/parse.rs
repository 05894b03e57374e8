//! Query parsing and normalization.
//!
//! Turns raw user text into a [`ParsedQuery`]: lowercased text, the ordered
//! list of numeric literals, an unknown-quantity flag, and operation-keyword
//! hits. Pure text scanning - no grammar, no ML.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Operation category hinted by a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpCategory {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

/// Keyword lists per operation, scanned in fixed table order. A keyword may
/// appear under several categories (`per`, `each`); hits are an auxiliary
/// signal only and are never authoritative for classification.
const OPERATION_KEYWORDS: &[(OpCategory, &[&str])] = &[
    (
        OpCategory::Addition,
        &["plus", "add", "sum", "total", "combined", "altogether", "more than", "increase"],
    ),
    (
        OpCategory::Subtraction,
        &["minus", "subtract", "difference", "less than", "decrease", "remove", "left", "remaining"],
    ),
    (
        OpCategory::Multiplication,
        &["times", "multiply", "product", "of", "per", "at", "each", "twice", "double", "triple"],
    ),
    (
        OpCategory::Division,
        &["divide", "divided by", "split", "share", "per", "each", "half", "third"],
    ),
];

/// Substrings that signal an unknown quantity. Substring matching is
/// deliberate: `x` inside a longer word counts as a variable hint.
const VARIABLE_MARKERS: &[&str] = &["x", "y", "unknown", "what number", "how many", "how much"];

// Compiled once at startup.
static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.?\d*").expect("Invalid regex: number pattern"));

/// A single operation-keyword hit found in the normalized text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordHit {
    /// The matched keyword.
    pub keyword: String,
    /// The operation the keyword hints at.
    pub category: OpCategory,
}

/// Normalized representation of one input query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedQuery {
    /// Raw input text, preserved verbatim (currency detection reads this).
    pub original: String,
    /// Lowercased, trimmed text used for all keyword matching.
    pub normalized: String,
    /// Decimal values in left-to-right order of appearance. Never mutated
    /// after construction; solvers read by positional index.
    pub numbers: Vec<f64>,
    /// True if the text mentions a variable or an unknown-quantity phrase.
    pub has_variable: bool,
    /// Operation-keyword hits in table order.
    pub keyword_hits: Vec<KeywordHit>,
}

/// Extracts all decimal literals from `text` in order of appearance.
///
/// The scan is greedy and permissive: a trailing lone dot (`"5."`) still
/// parses, tolerating noisy punctuation in word problems.
pub fn extract_numbers(text: &str) -> Vec<f64> {
    NUMBER_PATTERN
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}

/// Parser producing [`ParsedQuery`] values from raw text.
pub struct QueryParser;

impl Default for QueryParser {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse raw input into its normalized representation.
    ///
    /// Numeric extraction runs over the raw text; variable and keyword
    /// detection run over the lowercased text. The three computations are
    /// independent of each other.
    pub fn parse(&self, query: &str) -> ParsedQuery {
        let normalized = query.to_lowercase().trim().to_string();

        let numbers = extract_numbers(query);

        let has_variable = VARIABLE_MARKERS
            .iter()
            .any(|marker| normalized.contains(marker));

        let mut keyword_hits = Vec::new();
        for (category, keywords) in OPERATION_KEYWORDS {
            for keyword in *keywords {
                if normalized.contains(keyword) {
                    keyword_hits.push(KeywordHit {
                        keyword: (*keyword).to_string(),
                        category: *category,
                    });
                }
            }
        }

        ParsedQuery {
            original: query.to_string(),
            normalized,
            numbers,
            has_variable,
            keyword_hits,
        }
    }
}
