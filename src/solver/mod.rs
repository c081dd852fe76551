pub mod constants;
mod core;
mod errors;

pub use self::core::PuzzleSolver;
pub use errors::SolverError;
