//! Test fixtures and float assertions for dynarray development.
//!
//! Builders panic on failure: they are for tests, where a failed setup
//! should abort the test immediately.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{array_of, buffer_of, ones_to, values};

/// Tolerance used by [`assert_close`] and [`assert_all_close`].
pub const EPSILON: f64 = 1e-9;

/// Assert that two floats differ by less than [`EPSILON`].
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// Assert element-wise closeness, including equal lengths.
#[track_caller]
pub fn assert_all_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: {actual:?} vs {expected:?}"
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() < EPSILON,
            "element {i}: expected {e}, got {a} ({actual:?} vs {expected:?})"
        );
    }
}
