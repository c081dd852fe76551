//! Utils module split into submodules

mod arrangements;
mod errors;
mod validation;

pub use arrangements::all_arrangements;
pub use errors::UtilsError;
pub use validation::{validate_range, validate_values};

/// A single card value.
pub type Value = u8;

/// Number of cards in a puzzle.
pub const ARITY: usize = 4;

/// Largest value representable by the level encoding (5 bits).
pub const MAX_ENCODABLE_VALUE: Value = 31;

/// An ordered group of four card values.
pub type Tuple = [Value; ARITY];

#[cfg(test)]
mod tests;
