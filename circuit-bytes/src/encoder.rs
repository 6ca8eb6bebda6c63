//! Conversion of native byte data into [CircuitByte]s.
//!
//! Byte order, padding direction and array shape are all decided here:
//! every constructor maps source byte `i` to circuit byte `i` unless its doc says otherwise.

use ethers_core::types::H256;
use itertools::Itertools;

use crate::{
    error::{BytesError, Result},
    types::{CircuitByte, Fixed32, BYTES32_LEN},
    Field,
};

/// Longest input accepted by [fixed32_left_pad].
pub const MAX_LEFT_PAD_LEN: usize = BYTES32_LEN - 1;

/// Creates a new byte as a variable in a circuit.
pub fn byte<F: Field>(b: u8) -> CircuitByte<F> {
    CircuitByte::new(F::from(b as u64))
}

/// Creates a new array of bytes as variables in a circuit.
pub fn bytes<F: Field>(buf: &[u8]) -> Vec<CircuitByte<F>> {
    buf.iter().map(|b| byte(*b)).collect()
}

/// Creates a new array of byte arrays as variables in a circuit, keeping every inner length.
pub fn byte_arrays<F: Field>(bufs: &[impl AsRef<[u8]>]) -> Vec<Vec<CircuitByte<F>>> {
    bufs.iter().map(|buf| bytes(buf.as_ref())).collect()
}

/// Creates a new bytes32 as a variable in a circuit.
pub fn fixed32<F: Field>(buf: &[u8; BYTES32_LEN]) -> Fixed32<F> {
    Fixed32(buf.map(byte))
}

/// Same as [fixed32] for sources whose length is only known at runtime.
pub fn fixed32_from_slice<F: Field>(buf: &[u8]) -> Result<Fixed32<F>> {
    let buf: &[u8; BYTES32_LEN] = buf.try_into().map_err(|_| {
        log::debug!("rejecting {} byte input for bytes32", buf.len());
        BytesError::InvalidLength { expected: BYTES32_LEN, actual: buf.len() }
    })?;
    Ok(fixed32(buf))
}

pub fn fixed32_array<F: Field>(bufs: &[[u8; BYTES32_LEN]]) -> Vec<Fixed32<F>> {
    bufs.iter().map(fixed32).collect_vec()
}

/// Creates a new bytes32 from a `u64`. The `u64` is placed in the first 8 bytes, least
/// significant byte first, and the remaining 24 bytes are zero.
pub fn fixed32_from_u64_le<F: Field>(v: u64) -> Fixed32<F> {
    let mut buf = [0u8; BYTES32_LEN];
    buf[..8].copy_from_slice(&v.to_le_bytes());
    fixed32(&buf)
}

/// Creates a new bytes32 by left padding `buf` with zeros, i.e. `buf` occupies the last
/// `buf.len()` bytes. At most [MAX_LEFT_PAD_LEN] bytes are accepted.
pub fn fixed32_left_pad<F: Field>(buf: &[u8]) -> Result<Fixed32<F>> {
    if buf.len() > MAX_LEFT_PAD_LEN {
        log::debug!("rejecting {} byte input for left padding", buf.len());
        return Err(BytesError::InvalidLength { expected: MAX_LEFT_PAD_LEN, actual: buf.len() });
    }
    let mut padded = [0u8; BYTES32_LEN];
    padded[BYTES32_LEN - buf.len()..].copy_from_slice(buf);
    Ok(fixed32(&padded))
}

impl<F: Field> From<u8> for CircuitByte<F> {
    fn from(b: u8) -> Self {
        byte(b)
    }
}

impl<F: Field> From<[u8; BYTES32_LEN]> for Fixed32<F> {
    fn from(buf: [u8; BYTES32_LEN]) -> Self {
        fixed32(&buf)
    }
}

impl<F: Field> From<H256> for Fixed32<F> {
    fn from(hash: H256) -> Self {
        fixed32(&hash.0)
    }
}

impl<F: Field> TryFrom<&[u8]> for Fixed32<F> {
    type Error = BytesError;

    fn try_from(buf: &[u8]) -> Result<Self> {
        fixed32_from_slice(buf)
    }
}
