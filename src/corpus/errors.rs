use thiserror::Error;

use crate::solver::SolverError;
use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CorpusError {
    #[error("Solver error: {0}")]
    SolverError(#[from] SolverError),
    #[error("Utils error: {0}")]
    UtilsError(#[from] UtilsError),
}
