//! Splitting the sorted corpus into encoded levels

mod errors;
mod partition;

pub use errors::LevelError;
pub use partition::{LevelPartitioner, bucket_size};
