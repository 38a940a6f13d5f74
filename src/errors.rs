use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NumError {
    #[error("construction error: zero-length input")]
    ConstructionError,

    #[error("division by zero")]
    DivisionByZero,

    #[error("modulus not positive")]
    NonPositiveModulus,

    #[error("negative exponent: {exponent}")]
    NegativeExponent { exponent: i64 },

    #[error("negative bit position: {position}")]
    NegativeBitPosition { position: i64 },

    #[error("field width overflow: requested {width} bytes, value needs {needed}")]
    FieldWidthOverflow { width: usize, needed: usize },

    #[error("value is not invertible for the given modulus")]
    NotInvertible,

    #[error("empty range: end must be greater than start")]
    EmptyRange,

    #[error("value does not fit in {bits} bits")]
    Overflow { bits: u32 },
}
