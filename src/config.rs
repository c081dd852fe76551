use log::debug;

use crate::solver::constants::TARGET;
use crate::utils::{MAX_ENCODABLE_VALUE, UtilsError, Value, validate_range};

/// Default number of levels in a generated set
pub const DEFAULT_LEVEL_COUNT: usize = 100;

/// Configuration for a dataset generation run
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub min_value: Value,
    pub max_value: Value,
    /// Tuples containing this value are skipped as trivial.
    pub excluded_value: Value,
    pub target: Value,
    pub level_count: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_value: 1,
            max_value: MAX_ENCODABLE_VALUE,
            excluded_value: TARGET,
            target: TARGET,
            level_count: DEFAULT_LEVEL_COUNT,
        }
    }
}

impl GeneratorConfig {
    /// # Errors
    ///
    /// Returns an error if the value range is empty or not encodable, or if
    /// no levels are requested.
    pub fn validate(&self) -> Result<(), UtilsError> {
        debug!("Validating configuration: {:?}", self);
        validate_range(self.min_value, self.max_value)?;
        if self.level_count == 0 {
            return Err(UtilsError::ZeroLevels);
        }
        Ok(())
    }
}
