//! puzzle24 - A generator of leveled puzzle sets for the 24 card game
//!
//! Every non-decreasing tuple of four card values is solved exhaustively with
//! `+ - * /` over all five parenthesizations. Solvable tuples are ordered by
//! how many solutions they admit, split into levels and packed into compact
//! level strings.

pub mod codec;
pub mod config;
pub mod corpus;
pub mod expression;
pub mod levels;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use codec::{Alphabet, BASE64_ALPHABET, CodecError, LEVEL_ALPHABET, decode, encode};
pub use config::GeneratorConfig;
pub use corpus::{CorpusBuilder, CorpusError, Puzzle, ValueSpace};
pub use expression::{EvalResult, ExpressionError};
pub use levels::{LevelError, LevelPartitioner};
pub use solver::{PuzzleSolver, SolverError};
pub use utils::{UtilsError, Value, validate_values};

/// Find every expression over the four values that evaluates to 24
///
/// This is a convenience function that validates the input and runs a default
/// solver over it.
///
/// # Arguments
///
/// * `values` - Exactly four card values in `1..=31`
///
/// # Returns
///
/// * `Ok(Vec<EvalResult>)` - Every solution, empty when the tuple is unsolvable
/// * `Err(SolverError)` - If the input is invalid
///
/// # Errors
///
/// This function will return an error if:
/// * The input does not contain exactly four values
/// * A value is zero or above 31
///
/// # Examples
///
/// ```
/// use puzzle24::solve;
///
/// match solve(&[4, 6, 8, 2]) {
///     Ok(solutions) if !solutions.is_empty() => println!("First: {}", solutions[0].text),
///     Ok(_) => println!("No solution"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(values: &[Value]) -> Result<Vec<EvalResult>, SolverError> {
    let tuple = validate_values(values)?;

    let solver = PuzzleSolver::new();
    solver.solve(&tuple)
}

/// Build the corpus described by `config` and encode it into level strings
///
/// # Errors
///
/// Returns an error if the configuration is invalid, a tuple cannot be
/// solved, or a level cannot be encoded.
pub fn generate_levels(
    config: &GeneratorConfig,
    alphabet: &Alphabet,
) -> Result<Vec<String>, LevelError> {
    config.validate()?;

    let puzzles = CorpusBuilder::from_config(config)?.build_sorted()?;
    let partitioner = LevelPartitioner::new(config.level_count)?;
    partitioner.encode_levels(&puzzles, alphabet)
}
