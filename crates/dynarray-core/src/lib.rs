//! Core types for the dynarray workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the array handle type, the shared error enum, and the numeric
//! tolerances that the combinators treat as frozen constants.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;

pub use error::ArrayError;
pub use id::ArrayId;

/// Two values closer than this are the same value for `unique`.
pub const UNIQUE_TOLERANCE: f64 = 1e-9;

/// Fraction of a step by which `range` may overshoot its end point.
///
/// Absorbs accumulated rounding so that `range(0, 1, 0.1)` still
/// includes `1.0`.
pub const RANGE_STEP_TOLERANCE: f64 = 0.5;

/// Initial capacity of the buffer produced by `range`.
pub const RANGE_INITIAL_CAPACITY: usize = 16;
