/// Read contract between the evolutionary loop and this crate.
///
/// A solution is owned by the surrounding algorithm; the comparators and
/// scalarizing functions only ever read from it. It exposes a fixed number
/// of numeric objective values (insertion order is the dimension index and
/// is significant) and an aggregate constraint violation.
///
/// All solutions compared against each other must share the same objective
/// dimension count.
pub trait MultiObjective {
    /// Number of objective dimensions. Fixed at problem definition time.
    fn num_objectives(&self) -> usize;

    /// The value of objective dimension `objective`.
    ///
    /// Must be a pure projection: two calls on the same solution with no
    /// intervening mutation return the same value.
    fn objective(&self, objective: usize) -> f64;

    /// Aggregate constraint violation of the solution.
    ///
    /// `0.0` (or any non-negative value) means feasible. Negative values
    /// mean infeasible, and more negative means more violated.
    fn constraint_violation(&self) -> f64 {
        0.0
    }
}

/// A bare objective vector is a valid (always feasible) solution.
impl MultiObjective for [f64] {
    fn num_objectives(&self) -> usize {
        self.len()
    }

    fn objective(&self, objective: usize) -> f64 {
        self[objective]
    }
}

impl MultiObjective for Vec<f64> {
    fn num_objectives(&self) -> usize {
        self.len()
    }

    fn objective(&self, objective: usize) -> f64 {
        self[objective]
    }
}
