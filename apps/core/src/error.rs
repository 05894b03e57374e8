use thiserror::Error;

/// Pipeline-level error type.
///
/// Solver-local failures (missing operands, unparseable expressions) are
/// reported through `SolveOutcome` with an `"Error"` result and never reach
/// this type; an `EngineError` aborts the whole pipeline call and the query
/// is not recorded in the session log.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Arithmetic that cannot produce a usable value, such as dividing the
    /// running total by zero in a chained step.
    #[error("Math error: {0}")]
    Math(String),
}
