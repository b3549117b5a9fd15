//! Comparison and scalarization primitives for multi-objective
//! evolutionary algorithms.
//!
//! An evolutionary loop repeatedly needs to answer three questions about
//! its population: does solution `a` dominate solution `b`
//! ([`ConstrainedDominance`], [`ParetoComparator`]); which of two
//! co-ranked solutions is more valuable for diversity
//! ([`crowding`]); and what single fitness value represents a solution
//! for a scalar sub-problem of a decomposed problem ([`scalarize`]).
//!
//! All comparators and scalarizing functions are pure, stateless functions
//! over solution data borrowed from the caller. Population ownership,
//! variation operators, front construction and the generational loop
//! itself live outside this crate; solutions enter through the read-only
//! [`MultiObjective`] contract, ranking metadata flows back through the
//! [`crowding::DiversityTable`] side table.

pub mod constraint;
pub mod crowding;
pub mod dominance;
pub mod error;
pub mod objective;
pub mod pareto;
pub mod scalarize;
pub mod solution;

#[cfg(test)]
mod test_helper;

pub use crate::constraint::{ConstraintOrd, OverallConstraintViolation};
pub use crate::crowding::{crowding_order, DiversityTable, RankDist};
pub use crate::dominance::{ConstrainedDominance, DominanceOrd};
pub use crate::error::Error;
pub use crate::objective::{NthObjective, Objective};
pub use crate::pareto::{DimensionOrd, ParetoComparator, ParetoOrder};
pub use crate::scalarize::{
    scalarize_batch, IdealPoint, Pbi, Scalarizer, Tchebycheff, WeightVector, WeightedSum,
};
pub use crate::solution::MultiObjective;
