use std::fmt;

use crate::expression::ast::{Operator, TreeShape};
use crate::expression::eval::EvalResult;

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Leaves print as their position, nodes as `(left . right)`.
impl fmt::Display for TreeShape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TreeShape::Leaf(position) => write!(f, "{}", position),
            TreeShape::Node { left, right, .. } => write!(f, "({} . {})", left, right),
        }
    }
}

impl fmt::Display for EvalResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.text, self.value)
    }
}
