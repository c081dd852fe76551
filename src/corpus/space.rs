use log::debug;

use crate::utils::{ARITY, Tuple, UtilsError, Value, validate_range};

/// The non-decreasing four-value tuples drawn from `min..=max` without `excluded`
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSpace {
    min: Value,
    max: Value,
    excluded: Value,
}

impl ValueSpace {
    /// # Errors
    ///
    /// Returns an error unless `1 <= min <= max <= 31`.
    pub fn new(min: Value, max: Value, excluded: Value) -> Result<Self, UtilsError> {
        validate_range(min, max)?;
        Ok(Self { min, max, excluded })
    }

    /// Values usable at any position.
    pub fn values(&self) -> Vec<Value> {
        (self.min..=self.max).filter(|&v| v != self.excluded).collect()
    }

    /// Number of tuples, C(k + 3, 4) for k usable values.
    pub fn len(&self) -> usize {
        let k = self.values().len();
        (0..ARITY).map(|i| k + i).product::<usize>() / (1..=ARITY).product::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tuples with `v0` as the outermost loop and `v3` the innermost.
    pub fn tuples(&self) -> Vec<Tuple> {
        let values = self.values();
        let mut tuples = Vec::with_capacity(self.len());

        for (i0, &v0) in values.iter().enumerate() {
            for (i1, &v1) in values.iter().enumerate().skip(i0) {
                for (i2, &v2) in values.iter().enumerate().skip(i1) {
                    for &v3 in values.iter().skip(i2) {
                        tuples.push([v0, v1, v2, v3]);
                    }
                }
            }
        }

        debug!(
            "Enumerated {} tuples over {}..={} excluding {}",
            tuples.len(),
            self.min,
            self.max,
            self.excluded
        );
        tuples
    }
}
