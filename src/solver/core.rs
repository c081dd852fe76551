use log::debug;

use crate::expression::{EvalResult, Operand, shapes};
use crate::solver::constants::TARGET;
use crate::solver::errors::SolverError;
use crate::utils::{Tuple, Value, all_arrangements};

/// Exhaustive solver for a single four-card puzzle
#[derive(Debug, Clone)]
pub struct PuzzleSolver {
    target: f64,
}

impl PuzzleSolver {
    /// Create a solver looking for the standard target of 24
    pub fn new() -> Self {
        Self::with_target(TARGET)
    }

    pub fn with_target(target: Value) -> Self {
        Self {
            target: f64::from(target),
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Every expression over every arrangement and shape that equals the target.
    ///
    /// Results are neither deduplicated nor cut short, so the same text may
    /// appear several times and the count matches the full enumeration.
    ///
    /// # Errors
    ///
    /// Returns an error if a shape references a leaf outside the tuple.
    pub fn solve(&self, values: &Tuple) -> Result<Vec<EvalResult>, SolverError> {
        let solutions = self.collect_matching::<EvalResult, _>(values, |r| r.value)?;
        debug!("{:?} has {} solutions", values, solutions.len());
        Ok(solutions)
    }

    /// Same count as `solve(values).len()`, without building expression text.
    ///
    /// # Errors
    ///
    /// Returns an error if a shape references a leaf outside the tuple.
    pub fn count_solutions(&self, values: &Tuple) -> Result<usize, SolverError> {
        Ok(self.collect_matching::<f64, _>(values, |value| *value)?.len())
    }

    /// # Errors
    ///
    /// Returns an error if a shape references a leaf outside the tuple.
    pub fn is_solvable(&self, values: &Tuple) -> Result<bool, SolverError> {
        Ok(self.count_solutions(values)? > 0)
    }

    fn collect_matching<T, F>(&self, values: &Tuple, value_of: F) -> Result<Vec<T>, SolverError>
    where
        T: Operand,
        F: Fn(&T) -> f64,
    {
        let mut matching = Vec::new();
        for arrangement in all_arrangements(values) {
            for shape in shapes() {
                matching.extend(
                    shape
                        .evaluate::<T>(&arrangement)?
                        .into_iter()
                        .filter(|result| value_of(result) == self.target),
                );
            }
        }
        Ok(matching)
    }
}

impl Default for PuzzleSolver {
    fn default() -> Self {
        Self::new()
    }
}
