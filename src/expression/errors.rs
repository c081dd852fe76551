use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Leaf position {position} is outside an arrangement of {arity} values")]
    LeafOutOfRange { position: usize, arity: usize },
}
