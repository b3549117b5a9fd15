use thiserror::Error;

/// Errors surfaced by comparator construction and scalarization.
///
/// Every variant indicates a caller-side invariant violation. Comparisons
/// are cheap, pure and deterministic, so nothing here is retried or
/// recovered internally; the error is returned synchronously and the
/// surrounding algorithm driver decides what to do with it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An absent solution was passed to a comparator that requires both
    /// operands to be present.
    #[error("missing solution operand")]
    MissingSolution,

    /// A comparator or weight vector was constructed without any dimensions.
    #[error("empty dimension set")]
    EmptyDimensions,

    /// A weight vector or ideal point does not match the objective dimension
    /// count of the solution it is used with.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A weight vector is unusable for the requested operation, e.g. it
    /// contains negative entries or has zero norm where a projection
    /// direction is needed.
    #[error("degenerate weight vector")]
    DegenerateWeights,
}
