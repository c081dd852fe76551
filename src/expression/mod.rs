//! Expression module split into submodules for clarity

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::{Operator, TreeShape, shapes};
pub use errors::ExpressionError;
pub use eval::{EvalResult, Operand};
