use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("Value {value} at index {index} does not fit in 5 bits")]
    ValueOutOfRange { index: usize, value: u8 },
    #[error("Symbol {symbol:?} at index {index} is not in the alphabet")]
    UnknownSymbol { index: usize, symbol: char },
    #[error("Encoded length {0} is not a multiple of 5")]
    TruncatedWord(usize),
}
