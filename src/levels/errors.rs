use thiserror::Error;

use crate::codec::CodecError;
use crate::corpus::CorpusError;
use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LevelError {
    #[error("Level count must be at least 1")]
    ZeroLevels,
    #[error("Bucket of {size} exceeds the {remaining} remaining puzzles")]
    BucketOverflow { size: usize, remaining: usize },
    #[error("Encoding error: {0}")]
    CodecError(#[from] CodecError),
    #[error("Corpus error: {0}")]
    CorpusError(#[from] CorpusError),
    #[error("Utils error: {0}")]
    UtilsError(#[from] UtilsError),
}
