use std::cmp::Ordering;

use crate::constraint::{ConstraintOrd, OverallConstraintViolation};
use crate::error::Error;
use crate::solution::MultiObjective;

/// The dominance relation between two solutions, degraded to a total order.
///
/// `Less` means the first solution dominates (is preferred). Mutually
/// non-dominating pairs collapse to `Equal`, which makes the relation
/// usable for sorting but loses the distinction between "identical" and
/// "mixed wins"; callers that need it use
/// [`ParetoComparator`](crate::pareto::ParetoComparator) instead.

pub trait DominanceOrd<S: ?Sized> {
    fn dominance_ord(&self, a: &S, b: &S) -> Ordering;

    /// Returns true if `a` dominates `b`.
    fn dominates(&self, a: &S, b: &S) -> bool {
        self.dominance_ord(a, b) == Ordering::Less
    }

    /// Checked variant for callers holding possibly-empty slots. An absent
    /// operand is a caller bug at this level and fails fast with
    /// [`Error::MissingSolution`].
    fn try_dominance_ord(&self, a: Option<&S>, b: Option<&S>) -> Result<Ordering, Error> {
        match (a, b) {
            (Some(a), Some(b)) => Ok(self.dominance_ord(a, b)),
            _ => Err(Error::MissingSolution),
        }
    }
}

/// Constraint-first dominance over the raw objective values.
///
/// The constraint comparator is consulted first and its verdict is final:
/// constraint violation always trumps objective dominance. Only when it
/// reports no preference are the objective dimensions scanned, counting on
/// how many dimensions each side is strictly better. The side with the
/// higher count dominates; equal counts (all tied, or mixed wins) yield
/// `Equal`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstrainedDominance<C = OverallConstraintViolation> {
    constraints: C,
}

impl ConstrainedDominance {
    pub fn new() -> Self {
        ConstrainedDominance {
            constraints: OverallConstraintViolation,
        }
    }
}

impl<C> ConstrainedDominance<C> {
    /// Plugs a different constraint-handling policy in front of the
    /// objective scan.
    pub fn with_constraint_ord(constraints: C) -> Self {
        ConstrainedDominance { constraints }
    }
}

impl<S, C> DominanceOrd<S> for ConstrainedDominance<C>
where
    S: MultiObjective + ?Sized,
    C: ConstraintOrd<S>,
{
    fn dominance_ord(&self, a: &S, b: &S) -> Ordering {
        debug_assert_eq!(a.num_objectives(), b.num_objectives());

        match self.constraints.constraint_ord(a, b) {
            Ordering::Equal => {}
            ord => return ord,
        }

        let mut a_better = 0;
        let mut b_better = 0;
        for i in 0..a.num_objectives().min(b.num_objectives()) {
            let fa = a.objective(i);
            let fb = b.objective(i);
            if fa < fb {
                a_better += 1;
            } else if fa > fb {
                b_better += 1;
            }
        }

        b_better.cmp(&a_better)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use rand::Rng;

    use super::{ConstrainedDominance, DominanceOrd};
    use crate::error::Error;
    use crate::test_helper::TestSolution;

    #[test]
    fn test_dominance_on_both_dimensions() {
        let a = TestSolution::new(&[1.0, 2.0]);
        let b = TestSolution::new(&[2.0, 3.0]);
        let dominance = ConstrainedDominance::new();

        assert_eq!(Ordering::Less, dominance.dominance_ord(&a, &b));
        assert_eq!(Ordering::Greater, dominance.dominance_ord(&b, &a));
        assert!(dominance.dominates(&a, &b));
        assert!(!dominance.dominates(&b, &a));
    }

    #[test]
    fn test_reflexive() {
        let a = TestSolution::new(&[1.0, 2.0, 3.0]);
        let dominance = ConstrainedDominance::new();

        assert_eq!(Ordering::Equal, dominance.dominance_ord(&a, &a));
    }

    #[test]
    fn test_mixed_wins_collapse_to_equal() {
        let a = TestSolution::new(&[1.0, 5.0]);
        let b = TestSolution::new(&[5.0, 1.0]);
        let dominance = ConstrainedDominance::new();

        assert_eq!(Ordering::Equal, dominance.dominance_ord(&a, &b));
    }

    #[test]
    fn test_feasibility_trumps_objectives() {
        // The infeasible solution is better on every objective and still
        // loses.
        let feasible = TestSolution::new(&[100.0, 100.0]);
        let infeasible = TestSolution::infeasible(&[1.0, 1.0], -5.0);
        let dominance = ConstrainedDominance::new();

        assert_eq!(Ordering::Less, dominance.dominance_ord(&feasible, &infeasible));
        assert_eq!(Ordering::Greater, dominance.dominance_ord(&infeasible, &feasible));
    }

    #[test]
    fn test_less_violated_wins_among_infeasible() {
        let a = TestSolution::infeasible(&[100.0], -1.0);
        let b = TestSolution::infeasible(&[1.0], -5.0);
        let dominance = ConstrainedDominance::new();

        assert_eq!(Ordering::Less, dominance.dominance_ord(&a, &b));
    }

    #[test]
    fn test_missing_operand_fails_fast() {
        let a = TestSolution::new(&[1.0]);
        let dominance = ConstrainedDominance::new();

        assert_eq!(
            Err(Error::MissingSolution),
            dominance.try_dominance_ord(Some(&a), None)
        );
        assert_eq!(
            Err(Error::MissingSolution),
            dominance.try_dominance_ord(None::<&TestSolution>, None)
        );
        assert_eq!(
            Ok(Ordering::Equal),
            dominance.try_dominance_ord(Some(&a), Some(&a))
        );
    }

    #[test]
    fn test_antisymmetry_on_random_pairs() {
        let mut rng = rand::thread_rng();
        let dominance = ConstrainedDominance::new();

        for _ in 0..1000 {
            let a = random_solution(&mut rng);
            let b = random_solution(&mut rng);

            assert_eq!(
                dominance.dominance_ord(&a, &b),
                dominance.dominance_ord(&b, &a).reverse()
            );
        }
    }

    fn random_solution<R: Rng>(rng: &mut R) -> TestSolution {
        let objectives: Vec<f64> = (0..3).map(|_| rng.gen_range(0.0..2.0)).collect();
        // half of the solutions are infeasible
        let violation = if rng.gen::<bool>() {
            0.0
        } else {
            -rng.gen_range(0.0..3.0)
        };
        TestSolution::infeasible(&objectives, violation)
    }
}
