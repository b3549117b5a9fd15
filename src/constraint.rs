use std::cmp::Ordering;

use crate::solution::MultiObjective;

/// Orders two solutions by constraint violation alone.
///
/// `Less` means the first solution is preferred on this axis. A result of
/// `Equal` expresses "no preference from constraints"; the dominance
/// comparator then falls through to the objective values.

pub trait ConstraintOrd<S: ?Sized> {
    fn constraint_ord(&self, a: &S, b: &S) -> Ordering;
}

/// The standard feasibility-first policy on the overall violation value.
///
/// Feasible solutions precede infeasible ones regardless of their
/// objectives. Among two infeasible solutions the one with less violation
/// (smaller magnitude, i.e. the less negative value) precedes the other.
/// Two feasible solutions are `Equal` here.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverallConstraintViolation;

impl<S> ConstraintOrd<S> for OverallConstraintViolation
where
    S: MultiObjective + ?Sized,
{
    fn constraint_ord(&self, a: &S, b: &S) -> Ordering {
        let va = a.constraint_violation();
        let vb = b.constraint_violation();

        match (va < 0.0, vb < 0.0) {
            (false, false) => Ordering::Equal,
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            // both infeasible: the less negative value wins
            (true, true) => vb.partial_cmp(&va).unwrap_or(Ordering::Equal),
        }
    }
}
