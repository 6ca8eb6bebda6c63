use ethers_core::types::H256;
use halo2_base::halo2_proofs::halo2curves::bn256::Fr;
use rand::{rngs::StdRng, Rng, SeedableRng};
use test_case::test_case;
use test_log::test;

use crate::{decoder::*, encoder::*, types::CircuitByte, BytesError};

#[test]
fn test_decode_every_byte() {
    for b in 0..=u8::MAX {
        assert_eq!(byte::<Fr>(b).to_u8(), Ok(b));
    }
}

#[test_case(256; "just above a byte")]
#[test_case(1 << 16; "two bytes")]
#[test_case(u64::MAX; "u64 max")]
fn test_decode_rejects_non_byte(value: u64) {
    assert_eq!(CircuitByte::new(Fr::from(value)).to_u8(), Err(BytesError::NotAByte));
}

#[test]
fn test_decode_rejects_negative() {
    let minus_one = Fr::from(0u64) - Fr::from(1u64);
    assert_eq!(CircuitByte::new(minus_one).to_u8(), Err(BytesError::NotAByte));
}

#[test]
fn test_bytes_round_trip() {
    let mut rng = StdRng::from_seed([1u8; 32]);
    for len in [0usize, 1, 31, 32, 33, 200] {
        let buf: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        let encoded = bytes::<Fr>(&buf);
        let decoded = decode_bytes(&encoded).unwrap();
        assert_eq!(decoded, buf);
        assert_eq!(bytes::<Fr>(&decoded), encoded);
    }
}

#[test]
fn test_decode_bytes_stops_at_bad_element() {
    let mut encoded = bytes::<Fr>(&[1, 2, 3]);
    encoded[1] = CircuitByte::new(Fr::from(300u64));
    assert_eq!(decode_bytes(&encoded), Err(BytesError::NotAByte));
}

#[test]
fn test_fixed32_round_trip() {
    let hash = H256::from_low_u64_be(0xdead_beef_cafe_f00d);
    let word = fixed32::<Fr>(&hash.0);
    assert_eq!(decode_fixed32(&word), Ok(hash.0));
    assert_eq!(decode_fixed32_to_h256(&word), Ok(hash));
    assert_eq!(H256::try_from(word), Ok(hash));
}

#[test]
fn test_left_pad_decodes_as_big_endian() {
    let word = fixed32_left_pad::<Fr>(&0x1234u16.to_be_bytes()).unwrap();
    assert_eq!(decode_fixed32_to_h256(&word), Ok(H256::from_low_u64_be(0x1234)));
}
