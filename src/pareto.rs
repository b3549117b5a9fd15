use std::cmp::Ordering;

use log::debug;

use crate::dominance::DominanceOrd;
use crate::error::Error;
use crate::solution::MultiObjective;

/// Outcome of a generalized Pareto comparison.
///
/// This is not a total order. `Equal` and `Undetermined` are both
/// "incomparable for selection purposes" but mean different things:
/// `Equal` is identical on every dimension, `Undetermined` is a mix of
/// wins and losses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParetoOrder {
    /// The first solution is better on at least one dimension and worse on
    /// none.
    Superior,
    /// The second solution is better on at least one dimension and worse on
    /// none.
    Inferior,
    /// Both solutions are equal on every dimension.
    Equal,
    /// Each solution is better on at least one dimension.
    Undetermined,
}

impl ParetoOrder {
    /// Explicit narrowing to a total order: `Superior` maps to `Less` (the
    /// first solution is preferred), `Inferior` to `Greater`, and both
    /// `Equal` and `Undetermined` collapse to `Equal`.
    ///
    /// The narrowing is deliberately a separate step so that callers who
    /// need the four-valued relation are never degraded silently.
    pub fn to_ordering(self) -> Ordering {
        match self {
            ParetoOrder::Superior => Ordering::Less,
            ParetoOrder::Inferior => Ordering::Greater,
            ParetoOrder::Equal | ParetoOrder::Undetermined => Ordering::Equal,
        }
    }

    /// The relation as seen from the second solution.
    pub fn reverse(self) -> ParetoOrder {
        match self {
            ParetoOrder::Superior => ParetoOrder::Inferior,
            ParetoOrder::Inferior => ParetoOrder::Superior,
            other => other,
        }
    }
}

/// One per-dimension comparator of a [`ParetoComparator`].
///
/// A closed set of variants dispatched through a single point. The two
/// numeric variants read a raw objective dimension; `Custom` registers an
/// arbitrary comparison function for composite or transformed dimensions.
pub enum DimensionOrd<S: ?Sized> {
    /// Smaller raw value of the given objective dimension is better.
    Ascending(usize),
    /// Larger raw value of the given objective dimension is better.
    Descending(usize),
    /// Registered comparison function; `Less` means the first solution is
    /// better on this dimension.
    Custom(Box<dyn Fn(&S, &S) -> Ordering + Send + Sync>),
}

impl<S> DimensionOrd<S>
where
    S: MultiObjective + ?Sized,
{
    fn order(&self, a: &S, b: &S) -> Ordering {
        match self {
            DimensionOrd::Ascending(i) => a
                .objective(*i)
                .partial_cmp(&b.objective(*i))
                .unwrap_or(Ordering::Equal),
            DimensionOrd::Descending(i) => b
                .objective(*i)
                .partial_cmp(&a.objective(*i))
                .unwrap_or(Ordering::Equal),
            DimensionOrd::Custom(f) => f(a, b),
        }
    }
}

/// Generalized Pareto comparator over an ordered, non-empty collection of
/// per-dimension comparators.
///
/// Unlike [`ConstrainedDominance`](crate::dominance::ConstrainedDominance)
/// this keeps the full four-valued relation: it scans every dimension,
/// counting wins per side, and short-circuits to
/// [`ParetoOrder::Undetermined`] as soon as both sides have won a
/// dimension (the relation cannot change after that point).
pub struct ParetoComparator<S: ?Sized> {
    dimensions: Vec<DimensionOrd<S>>,
}

impl<S: ?Sized> std::fmt::Debug for ParetoComparator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParetoComparator")
            .field("dimensions", &self.dimensions.len())
            .finish()
    }
}

impl<S> ParetoComparator<S>
where
    S: MultiObjective + ?Sized,
{
    /// Builds a comparator from per-dimension comparators, in dimension
    /// order. An empty collection is a configuration error: it would make
    /// every comparison trivially `Equal`.
    pub fn new(dimensions: Vec<DimensionOrd<S>>) -> Result<Self, Error> {
        if dimensions.is_empty() {
            return Err(Error::EmptyDimensions);
        }
        debug!("pareto comparator over {} dimensions", dimensions.len());
        Ok(ParetoComparator { dimensions })
    }

    /// Ascending comparators on the first `n` raw objective dimensions,
    /// the common "all objectives minimized" case.
    pub fn ascending(n: usize) -> Result<Self, Error> {
        Self::new((0..n).map(DimensionOrd::Ascending).collect())
    }

    /// Number of per-dimension comparators.
    pub fn dimensions(&self) -> usize {
        self.dimensions.len()
    }

    pub fn compare(&self, a: &S, b: &S) -> ParetoOrder {
        let mut a_wins = 0u32;
        let mut b_wins = 0u32;

        for dimension in &self.dimensions {
            match dimension.order(a, b) {
                Ordering::Less => a_wins += 1,
                Ordering::Greater => b_wins += 1,
                Ordering::Equal => {}
            }
            if a_wins > 0 && b_wins > 0 {
                return ParetoOrder::Undetermined;
            }
        }

        if a_wins > 0 {
            ParetoOrder::Superior
        } else if b_wins > 0 {
            ParetoOrder::Inferior
        } else {
            ParetoOrder::Equal
        }
    }
}

/// The degraded total order, usable wherever a [`DominanceOrd`] is
/// expected (e.g. by an external front-construction step).
impl<S> DominanceOrd<S> for ParetoComparator<S>
where
    S: MultiObjective + ?Sized,
{
    fn dominance_ord(&self, a: &S, b: &S) -> Ordering {
        self.compare(a, b).to_ordering()
    }
}
