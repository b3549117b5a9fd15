use std::cmp::Ordering;

use log::debug;

use crate::solution::MultiObjective;

/// Ranking metadata of one solution: the non-domination rank assigned by an
/// external front-construction step and the crowding distance assigned by
/// the diversity estimation of its front.
///
/// Both values are recomputed every generation and carry no meaning across
/// generations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankDist {
    /// Index of the pareto front the solution belongs to; 0 is the best
    /// front.
    pub rank: u32,
    /// Crowding distance within the front. Boundary solutions carry
    /// `f64::INFINITY` by convention.
    pub dist: f64,
}

impl RankDist {
    // compare on rank first (ASC), then on dist (DESC)
    pub fn crowding_order(&self, other: &RankDist) -> Ordering {
        match self.rank.cmp(&other.rank) {
            Ordering::Equal => {
                // first criterion equal, second criterion decides
                // reverse ordering: larger distance = more diverse = preferred
                other
                    .dist
                    .partial_cmp(&self.dist)
                    .unwrap_or(Ordering::Equal)
            }
            other => other,
        }
    }
}

/// The crowded-comparison operator over possibly-absent metadata.
///
/// An absent operand is a strict loser rather than an error, so tournament
/// code can compare against empty sentinel slots without a separate guard.
pub fn crowding_order(a: Option<&RankDist>, b: Option<&RankDist>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.crowding_order(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Side table of ranking metadata, indexed by solution position in the
/// population.
///
/// Keeping rank and crowding distance out of the solution type clarifies
/// ownership: the table is written by the diversity estimation phase, fully
/// overwritten once per generation, and only read by the crowded
/// comparison. The writing phase must have completed before the table is
/// used for comparisons.
#[derive(Debug, Clone, Default)]
pub struct DiversityTable {
    entries: Vec<Option<RankDist>>,
}

impl DiversityTable {
    pub fn new() -> Self {
        DiversityTable { entries: Vec::new() }
    }

    pub fn with_len(len: usize) -> Self {
        DiversityTable {
            entries: vec![None; len],
        }
    }

    /// Drops all entries and resizes the table for the next generation.
    pub fn reset(&mut self, len: usize) {
        self.entries.clear();
        self.entries.resize(len, None);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn set(&mut self, index: usize, rank: u32, dist: f64) {
        if index >= self.entries.len() {
            self.entries.resize(index + 1, None);
        }
        self.entries[index] = Some(RankDist { rank, dist });
    }

    /// Metadata of the solution at `index`; `None` for unset or
    /// out-of-range indices.
    pub fn get(&self, index: usize) -> Option<&RankDist> {
        self.entries.get(index).and_then(|e| e.as_ref())
    }

    /// Crowded comparison of the solutions at positions `a` and `b`.
    /// `Less` means the solution at `a` is preferred; an index without
    /// metadata loses.
    pub fn order(&self, a: usize, b: usize) -> Ordering {
        crowding_order(self.get(a), self.get(b))
    }
}

/// Assigns `common_rank` and crowding distances to the solutions of one
/// front, writing the results into `table`.
///
/// `front` holds indices into `solutions`. Per objective, the two boundary
/// solutions of the front receive infinite distance; every interior
/// solution accumulates the gap between its two neighbors, normalized by
/// the objective's min-max span and the number of objectives.
pub fn assign_crowding_distance<S>(
    solutions: &[S],
    front: &[usize],
    common_rank: u32,
    table: &mut DiversityTable,
) where
    S: MultiObjective,
{
    let l = front.len();
    if l == 0 {
        return;
    }

    let num_objectives = solutions[front[0]].num_objectives();
    assert!(num_objectives > 0);

    // distance travels with its solution index through the per-objective sorts
    let mut s: Vec<(usize, f64)> = front.iter().map(|&i| (i, 0.0)).collect();

    for m in 0..num_objectives {
        // sort the front using objective `m`
        s.sort_by(|a, b| {
            solutions[a.0]
                .objective(m)
                .partial_cmp(&solutions[b.0].objective(m))
                .unwrap_or(Ordering::Equal)
        });

        s[0].1 = f64::INFINITY;
        s[l - 1].1 = f64::INFINITY;

        let span = solutions[s[l - 1].0].objective(m) - solutions[s[0].0].objective(m);
        if span != 0.0 {
            let norm = num_objectives as f64 * span;
            debug_assert!(norm != 0.0);
            for i in 1..(l - 1) {
                let gap = solutions[s[i + 1].0].objective(m) - solutions[s[i - 1].0].objective(m);
                debug_assert!(gap >= 0.0);
                s[i].1 += gap / norm;
            }
        }
    }

    for &(index, dist) in &s {
        table.set(index, common_rank, dist);
    }

    debug!(
        "assigned crowding distances to front {} ({} solutions)",
        common_rank, l
    );
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use float_cmp::assert_approx_eq;

    use super::{assign_crowding_distance, crowding_order, DiversityTable, RankDist};
    use crate::test_helper::TestSolution;

    #[test]
    fn test_larger_distance_wins_within_a_front() {
        let a = RankDist { rank: 0, dist: 2.0 };
        let b = RankDist { rank: 0, dist: 5.0 };

        // b is preferred: more diverse
        assert_eq!(Ordering::Greater, a.crowding_order(&b));
        assert_eq!(Ordering::Less, b.crowding_order(&a));
        assert_eq!(Ordering::Equal, a.crowding_order(&a));
    }

    #[test]
    fn test_rank_decides_before_distance() {
        let a = RankDist { rank: 0, dist: 2.0 };
        let b = RankDist { rank: 1, dist: 1000.0 };

        assert_eq!(Ordering::Less, a.crowding_order(&b));
        assert_eq!(Ordering::Greater, b.crowding_order(&a));
    }

    #[test]
    fn test_boundary_solutions_always_win_their_front() {
        let boundary = RankDist {
            rank: 3,
            dist: f64::INFINITY,
        };
        let interior = RankDist { rank: 3, dist: 7.5 };

        assert_eq!(Ordering::Less, boundary.crowding_order(&interior));
    }

    #[test]
    fn test_absent_metadata_is_a_strict_loser() {
        let a = RankDist { rank: 9, dist: 0.0 };

        assert_eq!(Ordering::Less, crowding_order(Some(&a), None));
        assert_eq!(Ordering::Greater, crowding_order(None, Some(&a)));
        assert_eq!(Ordering::Equal, crowding_order(None, None));
    }

    #[test]
    fn test_table_order_and_reset() {
        let mut table = DiversityTable::with_len(3);
        table.set(0, 0, 2.0);
        table.set(1, 0, 5.0);

        assert_eq!(Ordering::Greater, table.order(0, 1));
        // index 2 has no metadata, index 7 is out of range: both lose
        assert_eq!(Ordering::Less, table.order(0, 2));
        assert_eq!(Ordering::Less, table.order(1, 7));
        assert_eq!(Ordering::Equal, table.order(2, 7));

        table.reset(2);
        assert_eq!(2, table.len());
        assert_eq!(None, table.get(0));
    }

    #[test]
    fn test_crowding_distance_of_a_three_solution_front() {
        let solutions = vec![
            TestSolution::new(&[0.0, 1.0]),
            TestSolution::new(&[0.5, 0.5]),
            TestSolution::new(&[1.0, 0.0]),
        ];
        let mut table = DiversityTable::with_len(3);

        assign_crowding_distance(&solutions, &[0, 1, 2], 0, &mut table);

        assert!(table.get(0).unwrap().dist.is_infinite());
        assert!(table.get(2).unwrap().dist.is_infinite());

        // interior solution: per objective the neighbor gap is the full
        // span, normalized by 2 objectives * span = 0.5 each
        let interior = table.get(1).unwrap();
        assert_eq!(0, interior.rank);
        assert_approx_eq!(f64, 1.0, interior.dist, ulps = 2);
    }

    #[test]
    fn test_degenerate_front_gets_infinite_distances() {
        // a single-solution front is its own boundary
        let solutions = vec![TestSolution::new(&[1.0, 2.0])];
        let mut table = DiversityTable::new();

        assign_crowding_distance(&solutions, &[0], 4, &mut table);

        let entry = table.get(0).unwrap();
        assert_eq!(4, entry.rank);
        assert!(entry.dist.is_infinite());
    }

    #[test]
    fn test_empty_front_is_a_no_op() {
        let solutions: Vec<TestSolution> = Vec::new();
        let mut table = DiversityTable::new();

        assign_crowding_distance(&solutions, &[], 0, &mut table);
        assert!(table.is_empty());
    }
}
