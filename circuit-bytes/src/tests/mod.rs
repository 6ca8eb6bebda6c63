use halo2_base::halo2_proofs::halo2curves::bn256::Fr;

pub mod decoder;

fn fr(b: u8) -> Fr {
    Fr::from(b as u64)
}
