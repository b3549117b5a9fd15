use log::debug;
use rayon::prelude::*;

use crate::error::Error;
use crate::solution::MultiObjective;

/// Substitute factor for a zero weight in the Tchebycheff function. Keeps a
/// zero-weight dimension from being discarded entirely; a numerical
/// stability policy, not an approximation error.
const EPS_WEIGHT: f64 = 0.0001;

/// Default penalty parameter of [`Pbi`].
const DEFAULT_THETA: f64 = 5.0;

/// A non-negative weight vector defining one scalar sub-problem of a
/// decomposed multi-objective problem.
///
/// Conceptually the weights sum to one, but this is not enforced; a
/// near-zero weight is a valid, meaningful configuration. The L2 norm is
/// precomputed at construction for the projection-based functions.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector {
    weights: Vec<f64>,
    norm: f64,
}

impl WeightVector {
    /// Validates and wraps a weight vector. Empty vectors and negative or
    /// non-finite entries are rejected. A vector of all zeros is accepted
    /// here — the weighted sum tolerates it — and rejected by [`Pbi`],
    /// which needs a projection direction.
    pub fn new(weights: Vec<f64>) -> Result<Self, Error> {
        if weights.is_empty() {
            return Err(Error::EmptyDimensions);
        }
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(Error::DegenerateWeights);
        }
        let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();
        Ok(WeightVector { weights, norm })
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// L2 norm of the weights.
    pub fn norm(&self) -> f64 {
        self.norm
    }
}

/// The best (minimal) objective value observed so far per dimension, the
/// anchor point of the Tchebycheff and PBI functions.
///
/// The ideal point is owned and maintained by the decomposition driver;
/// the scalarizing functions only read it.
#[derive(Debug, Clone, PartialEq)]
pub struct IdealPoint {
    point: Vec<f64>,
}

impl IdealPoint {
    /// An ideal point that starts at `+inf` per dimension, so the first
    /// update adopts every observed value.
    pub fn new(num_objectives: usize) -> Self {
        IdealPoint {
            point: vec![f64::INFINITY; num_objectives],
        }
    }

    pub fn from_values(point: Vec<f64>) -> Self {
        IdealPoint { point }
    }

    pub fn len(&self) -> usize {
        self.point.len()
    }

    pub fn is_empty(&self) -> bool {
        self.point.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.point
    }

    /// Folds the objective values of a freshly evaluated solution into the
    /// ideal point (per-dimension minimum).
    pub fn update<S>(&mut self, solution: &S)
    where
        S: MultiObjective + ?Sized,
    {
        let n = self.point.len().min(solution.num_objectives());
        for (i, z) in self.point.iter_mut().take(n).enumerate() {
            let v = solution.objective(i);
            if v < *z {
                *z = v;
            }
        }
    }
}

/// A scalarizing aggregation function.
///
/// Maps a solution to a single fitness value for the sub-problem defined by
/// `weights`, anchored at `ideal`. **Smaller is better**; decomposition
/// drivers use the value to decide whether a candidate improves a
/// sub-problem.

pub trait Scalarizer {
    /// Computes the sub-problem fitness of `solution`.
    ///
    /// Fails with [`Error::DimensionMismatch`] when the weight vector or
    /// ideal point length differs from the solution's objective count.
    fn scalarize<S>(
        &self,
        solution: &S,
        weights: &WeightVector,
        ideal: &IdealPoint,
    ) -> Result<f64, Error>
    where
        S: MultiObjective + ?Sized;
}

fn check_dimensions<S>(
    solution: &S,
    weights: &WeightVector,
    ideal: &IdealPoint,
) -> Result<usize, Error>
where
    S: MultiObjective + ?Sized,
{
    let n = solution.num_objectives();
    if weights.len() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            actual: weights.len(),
        });
    }
    if ideal.len() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            actual: ideal.len(),
        });
    }
    Ok(n)
}

/// `Σ wᵢ·fᵢ(s)`.
///
/// The simplest and fastest aggregation. It cannot discover solutions in
/// non-convex regions of the pareto front; that is a property of the
/// function, not a defect. The ideal point is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedSum;

impl Scalarizer for WeightedSum {
    fn scalarize<S>(
        &self,
        solution: &S,
        weights: &WeightVector,
        ideal: &IdealPoint,
    ) -> Result<f64, Error>
    where
        S: MultiObjective + ?Sized,
    {
        let n = check_dimensions(solution, weights, ideal)?;

        Ok((0..n)
            .map(|i| weights.weights()[i] * solution.objective(i))
            .sum())
    }
}

/// `max_i wᵢ·|fᵢ(s) − zᵢ|` (min-max / Chebyshev scalarization).
///
/// A zero weight is substituted by [`EPS_WEIGHT`] so the dimension still
/// contributes instead of being ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tchebycheff;

impl Scalarizer for Tchebycheff {
    fn scalarize<S>(
        &self,
        solution: &S,
        weights: &WeightVector,
        ideal: &IdealPoint,
    ) -> Result<f64, Error>
    where
        S: MultiObjective + ?Sized,
    {
        let n = check_dimensions(solution, weights, ideal)?;

        let mut max = f64::NEG_INFINITY;
        for i in 0..n {
            let diff = (solution.objective(i) - ideal.values()[i]).abs();
            let w = weights.weights()[i];
            let d = if w == 0.0 { EPS_WEIGHT * diff } else { w * diff };
            if d > max {
                max = d;
            }
        }

        Ok(max)
    }
}

/// Penalty-based boundary intersection: `d₁ + θ·d₂`.
///
/// `d₁` is the length of the projection of `f(s) − z` onto the weight
/// direction, `d₂` the orthogonal distance from that direction. Deviating
/// from the decomposition direction is penalized by `θ`, which improves
/// diversity along non-convex fronts compared to the plain weighted sum.
///
/// Both distances are normalized by the weight vector norm, so scaling the
/// weights by a positive constant does not change the result. A zero-norm
/// weight vector leaves the direction undefined and fails with
/// [`Error::DegenerateWeights`].
#[derive(Debug, Clone, Copy)]
pub struct Pbi {
    theta: f64,
}

impl Pbi {
    pub fn new(theta: f64) -> Self {
        Pbi { theta }
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }
}

impl Default for Pbi {
    fn default() -> Self {
        Pbi {
            theta: DEFAULT_THETA,
        }
    }
}

impl Scalarizer for Pbi {
    fn scalarize<S>(
        &self,
        solution: &S,
        weights: &WeightVector,
        ideal: &IdealPoint,
    ) -> Result<f64, Error>
    where
        S: MultiObjective + ?Sized,
    {
        let n = check_dimensions(solution, weights, ideal)?;
        if weights.norm() == 0.0 {
            return Err(Error::DegenerateWeights);
        }

        let mut projection = 0.0;
        for i in 0..n {
            projection += (solution.objective(i) - ideal.values()[i]) * weights.weights()[i];
        }
        let d1 = projection.abs() / weights.norm();

        let mut d2_squared = 0.0;
        for i in 0..n {
            let deviation = (solution.objective(i) - ideal.values()[i])
                - d1 * (weights.weights()[i] / weights.norm());
            d2_squared += deviation * deviation;
        }

        Ok(d1 + self.theta * d2_squared.sqrt())
    }
}

/// Scalarizes a whole population for one sub-problem in parallel.
///
/// The scalarizing functions are pure, so this is safe as long as no other
/// thread mutates the solutions during the call. Returns the fitness values
/// in population order, or the first error encountered.
pub fn scalarize_batch<S, F>(
    scalarizer: &F,
    solutions: &[S],
    weights: &WeightVector,
    ideal: &IdealPoint,
) -> Result<Vec<f64>, Error>
where
    S: MultiObjective + Sync,
    F: Scalarizer + Sync,
{
    debug!("scalarizing {} solutions", solutions.len());

    solutions
        .par_iter()
        .map(|s| scalarizer.scalarize(s, weights, ideal))
        .collect()
}
