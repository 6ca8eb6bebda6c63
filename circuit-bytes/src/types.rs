use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::Field;

/// Number of bytes in a bytes32 word.
pub const BYTES32_LEN: usize = 32;

/// A byte as a variable in a circuit. Under the hood the value is a single circuit element.
///
/// `T` is the element type: a field element `F` for native values, or an
/// [`AssignedValue<F>`](halo2_base::AssignedValue) once the byte has been loaded into a context.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitByte<T> {
    pub value: T,
}

impl<T> CircuitByte<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> CircuitByte<U> {
        CircuitByte { value: f(self.value) }
    }
}

impl<F: Field> CircuitByte<F> {
    /// The zero byte. Within circuit APIs it is treated as a constant.
    pub const ZERO: Self = Self { value: F::ZERO };
    /// The one byte, also treated as a constant within circuit APIs.
    pub const ONE: Self = Self { value: F::ONE };
}

impl<T> AsRef<T> for CircuitByte<T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// The zero byte as a variable in a circuit. See [`CircuitByte::ZERO`].
pub const fn zero_byte<F: Field>() -> CircuitByte<F> {
    CircuitByte::<F>::ZERO
}

/// The one byte as a variable in a circuit. See [`CircuitByte::ONE`].
pub const fn one_byte<F: Field>() -> CircuitByte<F> {
    CircuitByte::<F>::ONE
}

/// A bytes32 word (hash, storage slot, ...) as 32 circuit bytes, in the byte order of the source buffer.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixed32<T>(pub [CircuitByte<T>; BYTES32_LEN]);

impl<T> Fixed32<T> {
    pub fn new(bytes: [CircuitByte<T>; BYTES32_LEN]) -> Self {
        Self(bytes)
    }

    pub fn into_bytes(self) -> [CircuitByte<T>; BYTES32_LEN] {
        self.0
    }

    pub fn as_bytes(&self) -> &[CircuitByte<T>; BYTES32_LEN] {
        &self.0
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Fixed32<U> {
        Fixed32(self.0.map(|byte| byte.map(&mut f)))
    }
}

impl<T: Copy> Fixed32<T> {
    /// The underlying circuit elements, in order.
    pub fn values(&self) -> [T; BYTES32_LEN] {
        self.0.map(|byte| byte.value)
    }
}

impl<F: Field> Fixed32<F> {
    pub const ZERO: Self = Self([CircuitByte::<F>::ZERO; BYTES32_LEN]);
}

impl<T> Deref for Fixed32<T> {
    type Target = [CircuitByte<T>];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> From<[CircuitByte<T>; BYTES32_LEN]> for Fixed32<T> {
    fn from(bytes: [CircuitByte<T>; BYTES32_LEN]) -> Self {
        Self(bytes)
    }
}

impl<T> IntoIterator for Fixed32<T> {
    type Item = CircuitByte<T>;
    type IntoIter = std::array::IntoIter<CircuitByte<T>, BYTES32_LEN>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
