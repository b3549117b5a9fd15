use crate::solution::MultiObjective;

/// Test solution with explicit objective values and constraint violation.
#[derive(Debug, Clone, PartialEq)]
pub struct TestSolution {
    pub objectives: Vec<f64>,
    pub violation: f64,
}

impl TestSolution {
    pub fn new(objectives: &[f64]) -> Self {
        TestSolution {
            objectives: objectives.to_vec(),
            violation: 0.0,
        }
    }

    pub fn infeasible(objectives: &[f64], violation: f64) -> Self {
        TestSolution {
            objectives: objectives.to_vec(),
            violation,
        }
    }
}

impl MultiObjective for TestSolution {
    fn num_objectives(&self) -> usize {
        self.objectives.len()
    }

    fn objective(&self, objective: usize) -> f64 {
        self.objectives[objective]
    }

    fn constraint_violation(&self) -> f64 {
        self.violation
    }
}
