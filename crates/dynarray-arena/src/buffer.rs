//! Growable `f64` storage with an explicit capacity.
//!
//! An [`ArrayBuffer`] keeps a logical capacity next to its `Vec<f64>`
//! so the doubling policy is observable and deterministic, rather than
//! whatever growth strategy `Vec` happens to use.

use std::fmt;

use dynarray_core::ArrayError;
use tracing::trace;

/// Owned, contiguous, growable sequence of `f64` values.
///
/// `len() <= capacity()` always holds, and capacity only ever grows.
/// Storage for `capacity()` slots is reserved up front, so appends below
/// capacity never reallocate.
#[derive(Debug)]
pub struct ArrayBuffer {
    /// Logically valid elements. `data.len()` is the array length.
    data: Vec<f64>,
    /// Logical capacity. `data.capacity() >= capacity`.
    capacity: usize,
}

impl ArrayBuffer {
    /// Create an empty buffer with room for `initial_capacity` values.
    ///
    /// A capacity of zero is clamped to one.
    pub fn with_capacity(initial_capacity: usize) -> Result<Self, ArrayError> {
        let capacity = initial_capacity.max(1);
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| ArrayError::AllocationFailed {
                requested: capacity,
            })?;
        Ok(Self { data, capacity })
    }

    /// Create a buffer holding a copy of `values`.
    ///
    /// The capacity is `max(capacity, values.len(), 1)`.
    pub fn from_slice(values: &[f64], capacity: usize) -> Result<Self, ArrayError> {
        let mut buffer = Self::with_capacity(capacity.max(values.len()))?;
        buffer.data.extend_from_slice(values);
        Ok(buffer)
    }

    /// Append a value, doubling the capacity first if the buffer is full.
    ///
    /// On allocation failure the buffer is left unchanged.
    pub fn push(&mut self, value: f64) -> Result<(), ArrayError> {
        if self.data.len() == self.capacity {
            self.grow_to(self.data.len() + 1)?;
        }
        self.data.push(value);
        Ok(())
    }

    /// Append every value in `values`, doubling as often as needed.
    pub fn extend_from_slice(&mut self, values: &[f64]) -> Result<(), ArrayError> {
        let required = self
            .data
            .len()
            .checked_add(values.len())
            .ok_or(ArrayError::AllocationFailed {
                requested: usize::MAX,
            })?;
        if required > self.capacity {
            self.grow_to(required)?;
        }
        self.data.extend_from_slice(values);
        Ok(())
    }

    /// Read the value at `index`.
    pub fn get(&self, index: usize) -> Result<f64, ArrayError> {
        self.data
            .get(index)
            .copied()
            .ok_or(ArrayError::OutOfBounds {
                index,
                len: self.data.len(),
            })
    }

    /// Overwrite the value at `index`.
    pub fn set(&mut self, index: usize, value: f64) -> Result<(), ArrayError> {
        let len = self.data.len();
        let slot = self
            .data
            .get_mut(index)
            .ok_or(ArrayError::OutOfBounds { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Number of logically valid elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Allocated slot count.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The valid elements as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Iterate over the valid elements.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.data.iter()
    }

    /// Memory reserved for this buffer in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.capacity * std::mem::size_of::<f64>()
    }

    /// Double the capacity until it holds at least `required` slots.
    fn grow_to(&mut self, required: usize) -> Result<(), ArrayError> {
        let mut new_capacity = self.capacity;
        while new_capacity < required {
            new_capacity = new_capacity
                .checked_mul(2)
                .ok_or(ArrayError::AllocationFailed { requested: required })?;
        }
        self.data
            .try_reserve_exact(new_capacity - self.data.len())
            .map_err(|_| ArrayError::AllocationFailed {
                requested: new_capacity,
            })?;
        trace!(from = self.capacity, to = new_capacity, "array buffer grew");
        self.capacity = new_capacity;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ArrayBuffer {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl fmt::Display for ArrayBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
