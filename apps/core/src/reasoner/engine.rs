//! Pipeline coordinator.
//!
//! Orchestrates normalize -> classify -> dispatch -> log for each query and
//! wraps the flow in a uniform response contract. The `success` flag tracks
//! pipeline-level completion only: a solver that answers `"Error"` still
//! completes the pipeline, is logged, and returns `success = true`. Callers
//! detect solver-level failure by inspecting the result string.

use serde::Serialize;
use tracing::{debug, info, warn};

use super::classify::ProblemClassifier;
use super::history::{HistoryEntry, SessionLog};
use super::parse::QueryParser;
use super::solvers;

/// Below this confidence a note is appended to the explanation.
const CONFIDENCE_NOTE_THRESHOLD: f32 = 0.8;

const EMPTY_INPUT_MESSAGE: &str = "Please enter a question.";

/// Response returned for every processed query.
#[derive(Debug, Clone, Serialize)]
pub struct EngineResponse {
    /// Formatted answer, the solver-level `"Error"` marker, or empty on
    /// pipeline failure.
    pub result: String,
    /// Narrated derivation, guidance, or failure message. Never empty.
    pub explanation: String,
    /// Whether the pipeline itself completed.
    pub success: bool,
}

/// The word-problem reasoning engine: one parser, one classifier, one
/// session log. Instantiate per session; the log is unbounded and must not
/// be shared across sessions.
pub struct MathEngine {
    parser: QueryParser,
    classifier: ProblemClassifier,
    log: SessionLog,
}

impl Default for MathEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MathEngine {
    pub fn new() -> Self {
        Self {
            parser: QueryParser::new(),
            classifier: ProblemClassifier::new(),
            log: SessionLog::new(),
        }
    }

    /// Process one query through the full pipeline.
    ///
    /// Empty input and stage failures short-circuit with `success = false`
    /// and are not logged. Everything else is appended to the session log,
    /// solver-level `"Error"` outcomes included.
    pub fn process(&mut self, query: &str) -> EngineResponse {
        if query.trim().is_empty() {
            return EngineResponse {
                result: String::new(),
                explanation: EMPTY_INPUT_MESSAGE.to_string(),
                success: false,
            };
        }

        let parsed = self.parser.parse(query);
        let classification = self.classifier.classify(&parsed);
        debug!(
            "query '{}' classified as {} ({:.2})",
            query, classification.kind, classification.confidence
        );

        let outcome = match solvers::dispatch(classification.kind, &parsed) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!("pipeline failed for '{}': {}", query, err);
                return EngineResponse {
                    result: String::new(),
                    explanation: format!(
                        "Error: {}\n\nTry rephrasing your question with clear numbers and relationships.",
                        err
                    ),
                    success: false,
                };
            }
        };

        let mut explanation = outcome.explanation;
        if classification.confidence < CONFIDENCE_NOTE_THRESHOLD {
            explanation.push_str(&format!(
                "\n\n(Confidence: {:.0}% - If incorrect, try rephrasing)",
                classification.confidence * 100.0
            ));
        }

        self.log.append(HistoryEntry::new(
            query.to_string(),
            outcome.result.clone(),
            explanation.clone(),
            classification.kind,
            classification.confidence,
        ));
        info!(
            "solved {} query: result = {}",
            classification.kind, outcome.result
        );

        EngineResponse {
            result: outcome.result,
            explanation,
            success: true,
        }
    }

    /// The session log, in insertion order.
    pub fn history(&self) -> &[HistoryEntry] {
        self.log.entries()
    }

    /// Empties the session log.
    pub fn clear_history(&mut self) {
        self.log.clear();
    }
}
