use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, info};
use rayon::prelude::*;

use crate::config::GeneratorConfig;
use crate::corpus::errors::CorpusError;
use crate::corpus::space::ValueSpace;
use crate::solver::PuzzleSolver;
use crate::utils::Tuple;

/// A solvable tuple and how many expressions reach the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub values: Tuple,
    pub solutions: usize,
}

/// Solves every tuple of a value space and keeps the solvable ones
pub struct CorpusBuilder {
    space: ValueSpace,
    solver: PuzzleSolver,
}

impl CorpusBuilder {
    pub fn new(space: ValueSpace, solver: PuzzleSolver) -> Self {
        Self { space, solver }
    }

    /// # Errors
    ///
    /// Returns an error if the configured value range is invalid.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, CorpusError> {
        let space = ValueSpace::new(config.min_value, config.max_value, config.excluded_value)?;
        Ok(Self::new(space, PuzzleSolver::with_target(config.target)))
    }

    pub fn space(&self) -> &ValueSpace {
        &self.space
    }

    /// Solvable puzzles in enumeration order.
    ///
    /// # Errors
    ///
    /// Returns an error if solving any tuple fails.
    pub fn build(&self) -> Result<Vec<Puzzle>, CorpusError> {
        let tuples = self.space.tuples();
        let total = tuples.len();
        info!("Solving {} tuples", total);

        let done = AtomicUsize::new(0);
        let counts = tuples
            .par_iter()
            .map(|values| -> Result<usize, CorpusError> {
                let solutions = self.solver.count_solutions(values)?;
                report_progress(done.fetch_add(1, Ordering::Relaxed) + 1, total);
                Ok(solutions)
            })
            .collect::<Result<Vec<usize>, CorpusError>>()?;

        let puzzles: Vec<Puzzle> = tuples
            .into_iter()
            .zip(counts)
            .filter(|&(_, solutions)| solutions > 0)
            .map(|(values, solutions)| Puzzle { values, solutions })
            .collect();

        info!("{} of {} tuples are solvable", puzzles.len(), total);
        Ok(puzzles)
    }

    /// Solvable puzzles, most solutions first.
    ///
    /// # Errors
    ///
    /// Returns an error if solving any tuple fails.
    pub fn build_sorted(&self) -> Result<Vec<Puzzle>, CorpusError> {
        let mut puzzles = self.build()?;
        sort_by_difficulty(&mut puzzles);
        Ok(puzzles)
    }
}

/// Stable sort by descending solution count; ties keep enumeration order.
pub fn sort_by_difficulty(puzzles: &mut [Puzzle]) {
    puzzles.sort_by(|a, b| b.solutions.cmp(&a.solutions));
}

fn report_progress(done: usize, total: usize) {
    if total == 0 {
        return;
    }
    let percent = 100 * done / total;
    if percent != 100 * (done - 1) / total {
        info!("Progress {}%", percent);
    } else {
        debug!("Solved {}/{}", done, total);
    }
}
