use log::{debug, info};

use crate::codec::{Alphabet, encode_with};
use crate::corpus::Puzzle;
use crate::levels::errors::LevelError;

/// Levels are cut to multiples of this many puzzles, so that every level but
/// the last flattens to whole six-value words.
const PUZZLES_PER_WORD_GROUP: usize = 3;

/// Size of the next bucket: the rounded even share of what remains, cut down
/// to a multiple of three.
pub fn bucket_size(remaining: usize, levels_left: usize) -> usize {
    // floor(0.5 + remaining / levels_left)
    let share = (2 * remaining + levels_left) / (2 * levels_left);
    share - share % PUZZLES_PER_WORD_GROUP
}

/// Splits a sorted corpus into a fixed number of levels
#[derive(Debug, Clone)]
pub struct LevelPartitioner {
    level_count: usize,
}

impl LevelPartitioner {
    /// # Errors
    ///
    /// Returns an error if `level_count` is zero.
    pub fn new(level_count: usize) -> Result<Self, LevelError> {
        if level_count == 0 {
            return Err(LevelError::ZeroLevels);
        }
        Ok(Self { level_count })
    }

    /// Consecutive, non-overlapping slices of `puzzles`, one per level; the
    /// last level takes whatever is left.
    ///
    /// # Errors
    ///
    /// Returns an error if a bucket would overrun the remaining puzzles.
    pub fn partition<'a>(&self, puzzles: &'a [Puzzle]) -> Result<Vec<&'a [Puzzle]>, LevelError> {
        let mut levels = Vec::with_capacity(self.level_count);
        let mut remaining = puzzles;

        for levels_left in (2..=self.level_count).rev() {
            let size = bucket_size(remaining.len(), levels_left);
            let (level, rest) =
                remaining
                    .split_at_checked(size)
                    .ok_or(LevelError::BucketOverflow {
                        size,
                        remaining: remaining.len(),
                    })?;
            debug!("Level {} holds {} puzzles", levels.len() + 1, level.len());
            levels.push(level);
            remaining = rest;
        }
        levels.push(remaining);

        Ok(levels)
    }

    /// Partitions `puzzles` and encodes each level's flattened values.
    ///
    /// # Errors
    ///
    /// Returns an error if partitioning fails or a value cannot be encoded.
    pub fn encode_levels(
        &self,
        puzzles: &[Puzzle],
        alphabet: &Alphabet,
    ) -> Result<Vec<String>, LevelError> {
        let levels = self
            .partition(puzzles)?
            .into_iter()
            .map(|level| {
                let flat: Vec<u8> = level.iter().flat_map(|p| p.values).collect();
                encode_with(&flat, alphabet)
            })
            .collect::<Result<Vec<String>, _>>()?;

        info!("Encoded {} puzzles into {} levels", puzzles.len(), levels.len());
        Ok(levels)
    }
}
