#![warn(clippy::useless_conversion)]

pub use halo2_base;
pub use halo2_base::utils::ScalarField as Field;

/// Loading bytes into a [halo2_base::Context]
pub mod assign;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod types;
/// Flat layout of byte variables as circuit elements
pub mod variable;

pub use error::BytesError;
pub use types::{one_byte, zero_byte, CircuitByte, Fixed32, BYTES32_LEN};
pub use variable::CircuitVariable;

#[cfg(test)]
mod tests;
