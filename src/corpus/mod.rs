//! Enumeration of the value space and collection of solvable puzzles

mod builder;
mod errors;
mod space;

pub use builder::{CorpusBuilder, Puzzle, sort_by_difficulty};
pub use errors::CorpusError;
pub use space::ValueSpace;
