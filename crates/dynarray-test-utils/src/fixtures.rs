//! Reusable array fixtures.
//!
//! - [`buffer_of`]: a standalone buffer holding the given values.
//! - [`array_of`]: the same, registered in a [`Registry`].
//! - [`ones_to`]: `[1.0, 2.0, ..., n]`, the shape most tests start from.
//! - [`values`]: read a registered array back into a `Vec`.

use dynarray_arena::{ArrayBuffer, Registry};
use dynarray_core::ArrayId;

/// A buffer holding `values`, with capacity equal to their count.
pub fn buffer_of(values: &[f64]) -> ArrayBuffer {
    ArrayBuffer::from_slice(values, values.len()).expect("fixture allocation failed")
}

/// Register an array holding `values` by appending them one at a time.
pub fn array_of(reg: &mut Registry, values: &[f64]) -> ArrayId {
    let id = reg
        .create(values.len())
        .expect("fixture registration failed");
    for &v in values {
        reg.append(id, v).expect("fixture append failed");
    }
    id
}

/// `[1.0, 2.0, ..., n as f64]`.
pub fn ones_to(n: u32) -> Vec<f64> {
    (1..=n).map(f64::from).collect()
}

/// The contents of a live registered array.
pub fn values(reg: &Registry, id: ArrayId) -> Vec<f64> {
    reg.get(id)
        .unwrap_or_else(|err| panic!("fixture read failed: {err}"))
        .as_slice()
        .to_vec()
}
