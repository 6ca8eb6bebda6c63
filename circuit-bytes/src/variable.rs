use crate::{
    error::{BytesError, Result},
    types::{CircuitByte, Fixed32, BYTES32_LEN},
};

/// A variable made of a fixed number of circuit elements.
///
/// `variables` and `from_variables` are inverse: the flat layout of a [Fixed32] is its
/// 32 bytes in order, so a struct of byte variables can be laid out field by field.
pub trait CircuitVariable<T: Copy>: Sized {
    /// Number of circuit elements in the flat layout.
    fn nb_elements() -> usize;

    fn variables(&self) -> Vec<T>;

    /// Fails with [BytesError::InvalidLength] unless `variables` has exactly
    /// [nb_elements](Self::nb_elements) entries.
    fn from_variables(variables: &[T]) -> Result<Self>;
}

impl<T: Copy> CircuitVariable<T> for CircuitByte<T> {
    fn nb_elements() -> usize {
        1
    }

    fn variables(&self) -> Vec<T> {
        vec![self.value]
    }

    fn from_variables(variables: &[T]) -> Result<Self> {
        match variables {
            [value] => Ok(Self::new(*value)),
            _ => Err(BytesError::InvalidLength { expected: 1, actual: variables.len() }),
        }
    }
}

impl<T: Copy> CircuitVariable<T> for Fixed32<T> {
    fn nb_elements() -> usize {
        BYTES32_LEN
    }

    fn variables(&self) -> Vec<T> {
        self.values().to_vec()
    }

    fn from_variables(variables: &[T]) -> Result<Self> {
        let values: [T; BYTES32_LEN] = variables.try_into().map_err(|_| {
            BytesError::InvalidLength { expected: BYTES32_LEN, actual: variables.len() }
        })?;
        Ok(Self(values.map(CircuitByte::new)))
    }
}

/// Concatenates the flat layouts of `vars`.
pub fn flatten_variables<T: Copy, V: CircuitVariable<T>>(vars: &[V]) -> Vec<T> {
    vars.iter().flat_map(|v| v.variables()).collect()
}

/// Splits `variables` into consecutive chunks of [CircuitVariable::nb_elements] elements.
///
/// A variable with no elements has no chunk count to recover: empty input gives an empty
/// list and any other input is [BytesError::InvalidLength] with `expected: 0`.
pub fn unflatten_variables<T: Copy, V: CircuitVariable<T>>(variables: &[T]) -> Result<Vec<V>> {
    let size = <V as CircuitVariable<T>>::nb_elements();
    if size == 0 {
        return match variables.len() {
            0 => Ok(vec![]),
            actual => Err(BytesError::InvalidLength { expected: 0, actual }),
        };
    }
    if variables.len() % size != 0 {
        return Err(BytesError::InvalidLength {
            expected: variables.len() - variables.len() % size + size,
            actual: variables.len(),
        });
    }
    variables.chunks(size).map(<V as CircuitVariable<T>>::from_variables).collect()
}
