use thiserror::Error;

/// Failures of the fixed-width byte constructors and the decoders.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum BytesError {
    /// The input cannot fit the mandated width.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    /// A circuit element that does not hold a value in `0..=255`.
    #[error("circuit element is not a byte")]
    NotAByte,
}

pub type Result<T> = std::result::Result<T, BytesError>;
