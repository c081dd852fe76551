use crate::utils::Value;

// Value every solution must reach
pub const TARGET: Value = 24;
