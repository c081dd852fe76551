use log::{debug, warn};

use crate::utils::errors::UtilsError;
use crate::utils::{ARITY, MAX_ENCODABLE_VALUE, Tuple, Value};

/// # Errors
///
/// Returns an error if `values` does not hold exactly four entries or any of
/// them lies outside `1..=31`.
pub fn validate_values(values: &[Value]) -> Result<Tuple, UtilsError> {
    debug!("Validating values: {:?}", values);

    let tuple: Tuple = values.try_into().map_err(|_| {
        warn!("Expected {} values, got {}", ARITY, values.len());
        UtilsError::WrongArity {
            expected: ARITY,
            actual: values.len(),
        }
    })?;

    if let Some(&value) = tuple
        .iter()
        .find(|&&v| v == 0 || v > MAX_ENCODABLE_VALUE)
    {
        warn!("Value {} is not a valid card", value);
        return Err(UtilsError::ValueOutOfRange {
            value,
            min: 1,
            max: MAX_ENCODABLE_VALUE,
        });
    }

    Ok(tuple)
}

/// # Errors
///
/// Returns an error unless `1 <= min <= max <= 31`.
pub fn validate_range(min: Value, max: Value) -> Result<(), UtilsError> {
    if min == 0 || min > max || max > MAX_ENCODABLE_VALUE {
        warn!("Rejecting value range {}..={}", min, max);
        return Err(UtilsError::InvalidRange { min, max });
    }
    Ok(())
}
