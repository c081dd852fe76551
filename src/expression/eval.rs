use log::trace;

use crate::expression::ast::{Operator, TreeShape};
use crate::expression::errors::ExpressionError;
use crate::utils::{ARITY, Tuple, Value};

/// A value reachable by a shape together with the expression that produces it
#[derive(Debug, Clone, PartialEq)]
pub struct EvalResult {
    pub value: f64,
    pub text: String,
}

/// Something a tree shape can be evaluated into.
///
/// `f64` carries the value alone; `EvalResult` also records the text.
/// Both follow the same enumeration, so counts agree.
pub trait Operand: Sized {
    fn leaf(value: Value) -> Self;
    fn combine(left: &Self, operator: Operator, right: &Self) -> Option<Self>;
}

impl Operand for f64 {
    #[inline]
    fn leaf(value: Value) -> Self {
        f64::from(value)
    }

    #[inline]
    fn combine(left: &Self, operator: Operator, right: &Self) -> Option<Self> {
        operator.apply(*left, *right)
    }
}

impl Operand for EvalResult {
    fn leaf(value: Value) -> Self {
        EvalResult {
            value: f64::from(value),
            text: value.to_string(),
        }
    }

    fn combine(left: &Self, operator: Operator, right: &Self) -> Option<Self> {
        operator
            .apply(left.value, right.value)
            .map(|value| EvalResult {
                value,
                text: format!("({}{}{})", left.text, operator, right.text),
            })
    }
}

impl TreeShape {
    /// # Errors
    ///
    /// Returns an error when the shape references a leaf position outside the
    /// arrangement.
    pub fn evaluate<T: Operand>(&self, arrangement: &Tuple) -> Result<Vec<T>, ExpressionError> {
        match self {
            TreeShape::Leaf(position) => {
                let value = arrangement
                    .get(*position)
                    .ok_or(ExpressionError::LeafOutOfRange {
                        position: *position,
                        arity: ARITY,
                    })?;
                Ok(vec![T::leaf(*value)])
            }
            TreeShape::Node {
                left,
                operators,
                right,
            } => {
                let left_results = left.evaluate::<T>(arrangement)?;
                let right_results = right.evaluate::<T>(arrangement)?;

                let mut results =
                    Vec::with_capacity(left_results.len() * right_results.len() * operators.len());
                for l in &left_results {
                    for r in &right_results {
                        for &operator in operators.iter() {
                            // Division by zero contributes nothing
                            if let Some(combined) = T::combine(l, operator, r) {
                                results.push(combined);
                            }
                        }
                    }
                }

                trace!(
                    "Node {} over {:?} produced {} results",
                    self,
                    arrangement,
                    results.len()
                );
                Ok(results)
            }
        }
    }
}
