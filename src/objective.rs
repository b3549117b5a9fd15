use std::cmp::Ordering;

use crate::solution::MultiObjective;

/// An *objective* is a pure projection of a solution onto a single scalar
/// dimension.
///
/// Given a solution, an objective answers "what is this solution worth on
/// my dimension", and through that value it induces a total order between
/// any two solutions. Objectives carry no state beyond their dimension
/// binding; there can be any number of different projections for a given
/// solution type, and a projection need not read a stored value (it can
/// compute a composite of several).

pub trait Objective<S: ?Sized> {
    /// Reads the objective value of `solution`.
    ///
    /// Must be side-effect free; two calls on the same solution with no
    /// intervening mutation return the same value. A solution that cannot
    /// be read (e.g. not yet evaluated) is the caller's responsibility to
    /// keep out of here.
    fn value(&self, solution: &S) -> f64;

    /// Total order induced by the objective value, ascending. Smaller is
    /// better under the minimization convention used throughout this crate.
    fn total_order(&self, a: &S, b: &S) -> Ordering {
        self.value(a)
            .partial_cmp(&self.value(b))
            .unwrap_or(Ordering::Equal)
    }
}

/// The objective bound to dimension `n` of a `MultiObjective` solution.
#[derive(Debug, Clone, Copy)]
pub struct NthObjective(pub usize);

impl<S> Objective<S> for NthObjective
where
    S: MultiObjective + ?Sized,
{
    fn value(&self, solution: &S) -> f64 {
        solution.objective(self.0)
    }
}
