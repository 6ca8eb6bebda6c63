use halo2_base::{
    safe_types::{SafeByte, SafeBytes32, SafeTypeChip},
    AssignedValue, Context,
};
use itertools::Itertools;

use crate::{
    encoder::{bytes, fixed32},
    error::{BytesError, Result},
    types::{CircuitByte, Fixed32, BYTES32_LEN},
    Field,
};

/// A byte that has been loaded into a [Context].
pub type AssignedByte<F> = CircuitByte<AssignedValue<F>>;
/// A bytes32 that has been loaded into a [Context].
pub type AssignedFixed32<F> = Fixed32<AssignedValue<F>>;

impl<F: Field> CircuitByte<F> {
    /// Assigns the byte as a private witness **without** range checking.
    pub fn assign(&self, ctx: &mut Context<F>) -> AssignedByte<F> {
        CircuitByte::new(ctx.load_witness(self.value))
    }

    pub fn assign_constant(&self, ctx: &mut Context<F>) -> AssignedByte<F> {
        CircuitByte::new(ctx.load_constant(self.value))
    }
}

impl<F: Field> Fixed32<F> {
    /// Assigns all 32 bytes as private witnesses **without** range checking.
    pub fn assign(&self, ctx: &mut Context<F>) -> AssignedFixed32<F> {
        Fixed32(self.0.map(|byte| byte.assign(ctx)))
    }

    pub fn assign_constant(&self, ctx: &mut Context<F>) -> AssignedFixed32<F> {
        Fixed32(self.0.map(|byte| byte.assign_constant(ctx)))
    }

    /// Assigns all 32 bytes as private witnesses and range checks each of them to 8 bits.
    pub fn assign_safe(&self, ctx: &mut Context<F>, safe: &SafeTypeChip<F>) -> SafeBytes32<F> {
        let raw = ctx.assign_witnesses(self.values());
        safe.raw_bytes_to(ctx, raw)
    }
}

/// **Unsafe:** Assigns `buf` as private witnesses **without** range checking.
pub fn load_bytes<F: Field>(ctx: &mut Context<F>, buf: &[u8]) -> Vec<AssignedByte<F>> {
    log::debug!("loading {} bytes as witnesses", buf.len());
    let values = bytes::<F>(buf).into_iter().map(|byte| byte.value);
    ctx.assign_witnesses(values).into_iter().map(CircuitByte::new).collect_vec()
}

/// **Unsafe:** Assigns `buf` as private witnesses **without** range checking.
pub fn load_bytes32<F: Field>(ctx: &mut Context<F>, buf: &[u8; BYTES32_LEN]) -> AssignedFixed32<F> {
    fixed32::<F>(buf).assign(ctx)
}

/// Load `buf` as private witness as [SafeBytes32], where bytes have been range checked.
pub fn load_safe_bytes32<F: Field>(
    ctx: &mut Context<F>,
    safe: &SafeTypeChip<F>,
    buf: &[u8; BYTES32_LEN],
) -> SafeBytes32<F> {
    fixed32::<F>(buf).assign_safe(ctx, safe)
}

/// Load `b` as a private witness as [SafeByte], range checked to 8 bits.
pub fn load_safe_byte<F: Field>(
    ctx: &mut Context<F>,
    safe: &SafeTypeChip<F>,
    b: u8,
) -> SafeByte<F> {
    safe.load_byte(ctx, b)
}

/// The zero byte as a constant cell.
pub fn load_zero_byte<F: Field>(ctx: &mut Context<F>) -> AssignedByte<F> {
    CircuitByte::new(ctx.load_zero())
}

pub fn load_one_byte<F: Field>(ctx: &mut Context<F>) -> AssignedByte<F> {
    CircuitByte::<F>::ONE.assign_constant(ctx)
}

/// Constrains `a[i] == b[i]` for every index. Fails with [BytesError::InvalidLength]
/// without adding any constraint if the lengths differ.
pub fn constrain_bytes_equal<F: Field>(
    ctx: &mut Context<F>,
    a: &[AssignedByte<F>],
    b: &[AssignedByte<F>],
) -> Result<()> {
    if a.len() != b.len() {
        log::debug!("cannot constrain {} bytes against {} bytes", a.len(), b.len());
        return Err(BytesError::InvalidLength { expected: a.len(), actual: b.len() });
    }
    for (left, right) in a.iter().zip(b.iter()) {
        ctx.constrain_equal(&left.value, &right.value);
    }
    Ok(())
}
