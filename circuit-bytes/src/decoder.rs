use ethers_core::types::H256;

use crate::{
    error::{BytesError, Result},
    types::{CircuitByte, Fixed32, BYTES32_LEN},
    Field,
};

impl<F: Field> CircuitByte<F> {
    /// The native byte this circuit byte holds, or [BytesError::NotAByte] if the
    /// element is not in `0..=255`.
    pub fn to_u8(&self) -> Result<u8> {
        let repr = self.value.to_bytes_le();
        match repr.split_first() {
            Some((b, rest)) if rest.iter().all(|x| *x == 0) => Ok(*b),
            _ => Err(BytesError::NotAByte),
        }
    }
}

pub fn decode_bytes<F: Field>(bytes: &[CircuitByte<F>]) -> Result<Vec<u8>> {
    bytes.iter().map(CircuitByte::to_u8).collect()
}

pub fn decode_fixed32<F: Field>(word: &Fixed32<F>) -> Result<[u8; BYTES32_LEN]> {
    let mut out = [0u8; BYTES32_LEN];
    for (dst, byte) in out.iter_mut().zip(word.iter()) {
        *dst = byte.to_u8()?;
    }
    Ok(out)
}

pub fn decode_fixed32_to_h256<F: Field>(word: &Fixed32<F>) -> Result<H256> {
    decode_fixed32(word).map(H256)
}

impl<F: Field> TryFrom<Fixed32<F>> for H256 {
    type Error = BytesError;

    fn try_from(word: Fixed32<F>) -> Result<Self> {
        decode_fixed32_to_h256(&word)
    }
}
